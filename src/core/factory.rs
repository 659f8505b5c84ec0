//! Logger construction with process-wide defaults

use super::{
    error::Result,
    formatter::Formatter,
    log_level::LogLevel,
    logger::{Logger, LoggerConfig},
    settings::LoggerSettings,
    transport::Transport,
};
use crate::formatters::HumanFormatter;
use crate::transports::ConsoleTransport;
use std::sync::{Arc, LazyLock};

/// Defaults shared by every logger the factory creates
pub struct LoggerDefaults {
    pub level: LogLevel,
    pub format: Arc<dyn Formatter>,
    pub transport: Arc<dyn Transport>,
}

impl LoggerDefaults {
    fn as_config(&self) -> LoggerConfig {
        LoggerConfig::new()
            .level(self.level)
            .shared_format(Arc::clone(&self.format))
            .shared_transport(Arc::clone(&self.transport))
    }
}

static DEFAULTS: LazyLock<LoggerDefaults> = LazyLock::new(|| LoggerDefaults {
    level: LogLevel::Info,
    format: Arc::new(HumanFormatter::new()),
    transport: Arc::new(ConsoleTransport::new()),
});

/// Creates loggers from partial configurations laid over [`LoggerDefaults`]
///
/// # Example
///
/// ```
/// use structured_logger::prelude::*;
///
/// let logger = LoggerFactory::create_logger_with(
///     LoggerConfig::new().format(JsonFormatter::new_pretty()),
/// );
/// assert_eq!(logger.min_level(), LogLevel::Info);
/// assert_eq!(logger.formatter_name(), "json");
/// ```
pub struct LoggerFactory;

impl LoggerFactory {
    pub fn defaults() -> &'static LoggerDefaults {
        &DEFAULTS
    }

    /// Logger with every default: INFO, human formatter, console transport
    pub fn create_logger() -> Logger {
        Self::create_logger_with(LoggerConfig::new())
    }

    /// Logger from `config`, with unset fields taken from the defaults
    pub fn create_logger_with(config: LoggerConfig) -> Logger {
        let defaults = Self::defaults();
        let level = config.level.unwrap_or(defaults.level);
        Logger::resolve(level, config.or(defaults.as_config()))
    }

    /// Logger from a deserialized settings document
    pub fn from_settings(settings: &LoggerSettings) -> Result<Logger> {
        Ok(Self::create_logger_with(settings.to_config()?))
    }
}
