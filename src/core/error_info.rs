//! Structured error details attached to log entries

use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::error::Error;

/// Error information carried by a [`LogEntry`](super::LogEntry).
///
/// `stack` holds the full trace text: the `"<name>: <message>"` headline,
/// one `caused by` line per error in the source chain and, when captured,
/// a backtrace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
    pub stack: String,
}

impl ErrorInfo {
    /// Create error info from explicit parts; the stack is the headline only
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = format!("{}: {}", name, message);
        Self {
            name,
            message,
            stack,
        }
    }

    /// Build error info from any error, walking its source chain
    pub fn from_error<E>(error: &E) -> Self
    where
        E: Error + ?Sized,
    {
        let mut info = Self::new(short_type_name::<E>(), error.to_string());
        let mut source = error.source();
        while let Some(cause) = source {
            info.stack.push_str("\n    caused by: ");
            info.stack.push_str(&cause.to_string());
            source = cause.source();
        }
        info
    }

    /// Replace the stack text
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    /// Append a backtrace captured at the call site
    #[must_use]
    pub fn with_backtrace(mut self) -> Self {
        let backtrace = Backtrace::force_capture();
        self.stack.push('\n');
        self.stack.push_str(&backtrace.to_string());
        self
    }

    /// `"<name>: <message>"`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }
}

impl<E: Error> From<&E> for ErrorInfo {
    fn from(error: &E) -> Self {
        ErrorInfo::from_error(error)
    }
}

/// Type name without its module path or generic arguments.
///
/// Trait objects keep the principal trait only, so
/// `dyn core::error::Error + Send + Sync` becomes `Error`.
fn short_type_name<E: ?Sized>() -> String {
    let full = std::any::type_name::<E>();
    let principal = match full.strip_prefix("dyn ") {
        Some(bounds) => bounds.split(" + ").next().unwrap_or(bounds),
        None => full,
    };
    let base = principal.split('<').next().unwrap_or(principal);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
