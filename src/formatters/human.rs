//! Human-readable formatter

use crate::core::{Formatter, LogEntry, LogLevel};

/// Renders `[<LEVEL>] <timestamp> <message>`.
///
/// A non-empty context follows on the next lines as 2-space indented JSON.
/// An error follows after that: the full stack at DEBUG, otherwise
/// `<name>: <message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for HumanFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let mut output = format!(
            "[{}] {} {}",
            entry.level.to_str(),
            entry.iso_timestamp(),
            entry.message
        );

        if let Some(context) = entry.non_empty_context() {
            output.push('\n');
            output.push_str(&context.to_pretty_json());
        }

        if let Some(ref error) = entry.error {
            output.push('\n');
            if entry.level == LogLevel::Debug {
                output.push_str(&error.stack);
            } else {
                output.push_str(&error.summary());
            }
        }

        output
    }

    fn name(&self) -> &str {
        "human"
    }
}
