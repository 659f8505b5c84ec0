//! Logging macros for ergonomic log message formatting.
//!
//! The level macros format their arguments like `format!` and return the
//! logger's `Result`. [`context!`](crate::context) builds a
//! [`LogContext`](crate::LogContext) from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use structured_logger::prelude::*;
//! use structured_logger::info;
//!
//! let logger = LoggerFactory::create_logger();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Build a [`LogContext`](crate::LogContext) from `key => value` pairs.
///
/// Values are anything convertible into `serde_json::Value`.
///
/// # Examples
///
/// ```
/// use structured_logger::context;
///
/// let ctx = context! { "user_id" => 42, "action" => "login" };
/// assert_eq!(ctx.to_string(), r#"{"user_id":42,"action":"login"}"#);
///
/// let empty = context! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::LogContext::new()$(.with_field($key, $value))+
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = LoggerFactory::create_logger();
/// use structured_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// The message is only formatted when DEBUG is enabled.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_enabled!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_enabled!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_enabled!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = LoggerFactory::create_logger();
/// use structured_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_enabled!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Skips `format!` entirely when `$level` is gated out.
#[doc(hidden)]
#[macro_export]
macro_rules! log_enabled {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_level_enabled(level) {
            logger.log(level, format!($($arg)+))
        } else {
            $crate::Result::Ok(())
        }
    }};
}
