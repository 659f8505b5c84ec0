//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    error_info::ErrorInfo,
    formatter::Formatter,
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    transport::Transport,
};
use crate::formatters::HumanFormatter;
use crate::transports::ConsoleTransport;
use std::fmt;
use std::sync::Arc;

/// Logger configuration; also serves as the builder for [`Logger`].
///
/// Only `level` is required. Omitted fields are resolved once, when the
/// logger is built: a human-readable formatter, a console transport and an
/// empty base context.
#[derive(Clone, Default)]
pub struct LoggerConfig {
    pub level: Option<LogLevel>,
    pub format: Option<Arc<dyn Formatter>>,
    pub transport: Option<Arc<dyn Transport>>,
    pub context: Option<LogContext>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the formatter
    #[must_use = "builder methods return a new value"]
    pub fn format<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.format = Some(Arc::new(formatter));
        self
    }

    /// Set an already shared formatter
    #[must_use = "builder methods return a new value"]
    pub fn shared_format(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.format = Some(formatter);
        self
    }

    /// Set the transport
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set an already shared transport
    #[must_use = "builder methods return a new value"]
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the base context merged into every entry
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Fill every field left unset here from `defaults`
    #[must_use]
    pub fn or(self, defaults: LoggerConfig) -> Self {
        Self {
            level: self.level.or(defaults.level),
            format: self.format.or(defaults.format),
            transport: self.transport.or(defaults.transport),
            context: self.context.or(defaults.context),
        }
    }

    /// Build the logger
    pub fn build(self) -> Result<Logger> {
        Logger::new(self)
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("format", &self.format.as_ref().map(|format| format.name()))
            .field(
                "transport",
                &self.transport.as_ref().map(|transport| transport.name()),
            )
            .field("context", &self.context)
            .finish()
    }
}

/// Gates, renders and dispatches log calls.
///
/// Every enabled call builds one [`LogEntry`], formats it and hands the
/// result to the transport before returning. Disabled calls do nothing.
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    formatter: Arc<dyn Formatter>,
    transport: Arc<dyn Transport>,
    context: LogContext,
}

impl Logger {
    /// Construct a logger, failing with [`LoggerError::MissingLevel`] when
    /// the configuration has no level.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let min_level = config.level.ok_or(LoggerError::MissingLevel)?;
        Ok(Self::resolve(min_level, config))
    }

    /// Resolve the optional fields of `config` into a ready logger
    pub(crate) fn resolve(min_level: LogLevel, config: LoggerConfig) -> Self {
        Self {
            min_level,
            formatter: config
                .format
                .unwrap_or_else(|| Arc::new(HumanFormatter::new())),
            transport: config
                .transport
                .unwrap_or_else(|| Arc::new(ConsoleTransport::new())),
            context: config.context.unwrap_or_default(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use structured_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .format(JsonFormatter::new())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.formatter_name(), "json");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerConfig {
        LoggerConfig::new()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// A new logger sharing this one's formatter and transport, with `extra`
    /// laid over the base context.
    #[must_use]
    pub fn with_context(&self, extra: &LogContext) -> Self {
        Self {
            min_level: self.min_level,
            formatter: Arc::clone(&self.formatter),
            transport: Arc::clone(&self.transport),
            context: self.context.merged(extra),
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.dispatch(level, message, None, None)
    }

    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<()> {
        self.dispatch(level, message, Some(context), None)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn debug_with_context(
        &self,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<()> {
        self.log_with_context(LogLevel::Debug, message, context)
    }

    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) -> Result<()> {
        self.log_with_context(LogLevel::Info, message, context)
    }

    pub fn warn_with_context(&self, message: impl Into<String>, context: LogContext) -> Result<()> {
        self.log_with_context(LogLevel::Warn, message, context)
    }

    pub fn error_with_context(
        &self,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<()> {
        self.log_with_context(LogLevel::Error, message, context)
    }

    /// Log at ERROR with structured error details
    pub fn error_with_cause(
        &self,
        message: impl Into<String>,
        context: Option<LogContext>,
        error: ErrorInfo,
    ) -> Result<()> {
        self.dispatch(LogLevel::Error, message, context, Some(error))
    }

    fn dispatch(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: Option<LogContext>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        if !self.is_level_enabled(level) {
            return Ok(());
        }

        let mut entry = LogEntry::new(level, message);
        let merged = match context {
            Some(call) => self.context.merged(&call),
            None => self.context.clone(),
        };
        if !merged.is_empty() {
            entry = entry.with_context(merged);
        }
        if let Some(error) = error {
            entry = entry.with_error(error);
        }

        let rendered = self.formatter.format(&entry);
        self.transport.log(&rendered, level)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("formatter", &self.formatter.name())
            .field("transport", &self.transport.name())
            .field("context", &self.context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::JsonFormatter;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every (level, message) pair it receives
    #[derive(Default)]
    struct CaptureTransport {
        writes: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Transport for CaptureTransport {
        fn log(&self, message: &str, level: LogLevel) -> Result<()> {
            self.writes.lock().push((level, message.to_string()));
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    /// Returns a fixed string and counts calls
    #[derive(Default)]
    struct CountingFormatter {
        calls: AtomicUsize,
    }

    impl Formatter for CountingFormatter {
        fn format(&self, _entry: &LogEntry) -> String {
            self.calls.fetch_add(1, Ordering::Relaxed);
            "[DEBUG] 2025-07-18T14:48:20.822Z debug log".to_string()
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn capture_logger(level: LogLevel) -> (Logger, Arc<CaptureTransport>, Arc<CountingFormatter>) {
        let transport = Arc::new(CaptureTransport::default());
        let formatter = Arc::new(CountingFormatter::default());
        let logger = Logger::builder()
            .level(level)
            .shared_transport(transport.clone())
            .shared_format(formatter.clone())
            .build()
            .unwrap();
        (logger, transport, formatter)
    }

    #[test]
    fn test_new_requires_level() {
        let err = Logger::new(LoggerConfig::new()).unwrap_err();
        assert!(matches!(err, LoggerError::MissingLevel));
    }

    #[test]
    fn test_new_applies_defaults() {
        let logger = Logger::builder().level(LogLevel::Debug).build().unwrap();
        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert_eq!(logger.formatter_name(), "human");
        assert_eq!(logger.transport_name(), "console");
        assert!(logger.context().is_empty());
    }

    #[test]
    fn test_each_entry_point_dispatches_once() {
        let (logger, transport, _) = capture_logger(LogLevel::Debug);

        logger.debug("debug log").unwrap();
        logger.info("info log").unwrap();
        logger.warn("warn log").unwrap();
        logger.error("error log").unwrap();

        let writes = transport.writes.lock();
        let levels: Vec<_> = writes.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, LogLevel::ALL);
        assert!(writes
            .iter()
            .all(|(_, msg)| msg == "[DEBUG] 2025-07-18T14:48:20.822Z debug log"));
    }

    #[test]
    fn test_disabled_levels_skip_formatting() {
        let (logger, transport, formatter) = capture_logger(LogLevel::Error);

        logger.debug("debug log").unwrap();
        logger.info("info log").unwrap();
        logger.warn("warn log").unwrap();

        assert!(transport.writes.lock().is_empty());
        assert_eq!(formatter.calls.load(Ordering::Relaxed), 0);

        logger.error("error log").unwrap();
        assert_eq!(transport.writes.lock().len(), 1);
        assert_eq!(formatter.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_call_context_overrides_base() {
        let transport = Arc::new(CaptureTransport::default());
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .format(JsonFormatter::new())
            .shared_transport(transport.clone())
            .context(LogContext::new().with_field("a", 1))
            .build()
            .unwrap();

        logger
            .info_with_context("merge", LogContext::new().with_field("a", 2).with_field("b", 3))
            .unwrap();

        let writes = transport.writes.lock();
        assert!(writes[0].1.contains(r#""context":{"a":2,"b":3}"#));
        // base context is unchanged for later calls
        assert_eq!(logger.context().get("a"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_error_with_cause_attaches_error() {
        let transport = Arc::new(CaptureTransport::default());
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .shared_transport(transport.clone())
            .build()
            .unwrap();

        logger
            .error_with_cause("request failed", None, ErrorInfo::new("TimeoutError", "5s elapsed"))
            .unwrap();

        let writes = transport.writes.lock();
        assert_eq!(writes[0].0, LogLevel::Error);
        assert!(writes[0].1.ends_with("request failed\nTimeoutError: 5s elapsed"));
    }

    #[test]
    fn test_with_context_extends_base() {
        let (logger, _, _) = capture_logger(LogLevel::Info);
        let child = logger
            .with_context(&LogContext::new().with_field("service", "api"))
            .with_context(&LogContext::new().with_field("region", "eu"));

        assert_eq!(child.context().len(), 2);
        assert!(logger.context().is_empty());
        assert_eq!(child.transport_name(), "capture");
    }

    #[test]
    fn test_config_or_keeps_supplied_fields() {
        let defaults = LoggerConfig::new()
            .level(LogLevel::Info)
            .format(HumanFormatter::new());
        let merged = LoggerConfig::new().format(JsonFormatter::new()).or(defaults);

        assert_eq!(merged.level, Some(LogLevel::Info));
        assert_eq!(merged.format.as_ref().map(|f| f.name()), Some("json"));
        assert!(merged.transport.is_none());
    }
}
