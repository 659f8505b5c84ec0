//! JSON formatter for structured logging

use crate::core::{ErrorInfo, Formatter, LogContext, LogEntry, LogLevel};
use serde::Serialize;

/// Renders each entry as one JSON object.
///
/// Keys appear as `level`, `timestamp`, `message`, then `context` when it has
/// fields and `error` when present. The error object carries `stack` only at
/// DEBUG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Compact output
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// 2-space indented output
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    level: &'static str,
    timestamp: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a LogContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<&'a str>,
    name: &'a str,
}

impl<'a> JsonError<'a> {
    fn new(error: &'a ErrorInfo, level: LogLevel) -> Self {
        Self {
            message: &error.message,
            stack: (level == LogLevel::Debug).then_some(error.stack.as_str()),
            name: &error.name,
        }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let record = JsonRecord {
            level: entry.level.to_str(),
            timestamp: entry.iso_timestamp(),
            message: &entry.message,
            context: entry.non_empty_context(),
            error: entry
                .error
                .as_ref()
                .map(|error| JsonError::new(error, entry.level)),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        rendered.unwrap_or_default()
    }

    fn name(&self) -> &str {
        "json"
    }
}
