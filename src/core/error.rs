//! Error types for the logger system

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logger constructed without a minimum level
    #[error("missing log level parameter")]
    MissingLevel,

    /// Console sink table lacking one or more severity methods
    #[error("invalid console object: missing {}", .missing.join(", "))]
    InvalidSink { missing: Vec<&'static str> },

    /// Sink write failure, propagated to the caller unmodified
    #[error("Sink write failed for {level} entry: {source}")]
    SinkWrite {
        level: LogLevel,
        #[source]
        source: std::io::Error,
    },

    /// Settings value that cannot be resolved
    #[error("Invalid settings for '{field}': {message}")]
    InvalidSettings { field: String, message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid sink error naming the missing methods
    pub fn invalid_sink(missing: Vec<&'static str>) -> Self {
        LoggerError::InvalidSink { missing }
    }

    /// Wrap a sink IO failure for the given level
    pub fn sink_write(level: LogLevel, source: std::io::Error) -> Self {
        LoggerError::SinkWrite { level, source }
    }

    /// Create an invalid settings error
    pub fn settings(field: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidSettings {
            field: field.into(),
            message: message.into(),
        }
    }
}
