//! # Structured Logger
//!
//! A small synchronous structured-logging library. A [`Logger`] gates calls
//! by severity, a [`Formatter`] renders each entry to a string and a
//! [`Transport`] delivers that string to a sink.
//!
//! ## Features
//!
//! - **Two formats**: human-readable lines and JSON (compact or pretty)
//! - **Structured context**: base fields per logger, merged with per-call fields
//! - **Console transport**: one sink method per severity
//! - **Factory defaults**: INFO level, human formatter, console transport
//!
//! ```
//! use structured_logger::prelude::*;
//!
//! let logger = LoggerFactory::create_logger();
//! logger.info_with_context("server started", context! { "port" => 8080 })?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::context;
    pub use crate::core::{
        ErrorInfo, Formatter, LogContext, LogEntry, LogLevel, Logger, LoggerConfig,
        LoggerError, LoggerFactory, LoggerSettings, Result, Transport,
    };
    pub use crate::formatters::{HumanFormatter, JsonFormatter};
    pub use crate::transports::{Console, ConsoleSinks, ConsoleTransport, StreamConsole};
}

pub use crate::core::{
    ErrorInfo, FormatKind, Formatter, LogContext, LogEntry, LogLevel, Logger, LoggerConfig,
    LoggerDefaults, LoggerError, LoggerFactory, LoggerSettings, Result, Transport,
};
pub use formatters::{HumanFormatter, JsonFormatter};
pub use transports::{Console, ConsoleSinks, ConsoleTransport, StdConsole, StreamConsole};
