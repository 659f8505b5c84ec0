//! Core logger types and traits

pub mod error;
pub mod error_info;
pub mod factory;
pub mod formatter;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod settings;
pub mod transport;

pub use error::{LoggerError, Result};
pub use error_info::ErrorInfo;
pub use factory::{LoggerDefaults, LoggerFactory};
pub use formatter::Formatter;
pub use log_context::LogContext;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerConfig};
pub use settings::{FormatKind, LoggerSettings};
pub use transport::Transport;
