//! Log entry structure

use super::error_info::ErrorInfo;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ISO 8601 with milliseconds and a `Z` suffix: `2025-07-18T13:37:09.218Z`
pub const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One log call, built after the gate check and discarded after formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            message: message.into(),
            context: None,
            error: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_error(mut self, error: ErrorInfo) -> Self {
        self.error = Some(error);
        self
    }

    /// Context fields worth rendering; an empty context counts as none
    pub fn non_empty_context(&self) -> Option<&LogContext> {
        self.context.as_ref().filter(|context| !context.is_empty())
    }

    pub fn iso_timestamp(&self) -> String {
        self.timestamp.format(ISO8601_MILLIS).to_string()
    }
}
