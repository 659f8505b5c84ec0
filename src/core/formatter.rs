//! Formatter trait for rendering log entries

use super::log_entry::LogEntry;

/// Renders a [`LogEntry`] into the string handed to a transport.
///
/// Implementations must be pure: the same entry always yields the same text.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;
    fn name(&self) -> &str;
}
