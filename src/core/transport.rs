//! Transport trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Delivers an already-rendered message to a sink selected by `level`.
///
/// Sink failures are returned as-is; transports never retry or fall back.
pub trait Transport: Send + Sync {
    fn log(&self, message: &str, level: LogLevel) -> Result<()>;
    fn name(&self) -> &str;
}
