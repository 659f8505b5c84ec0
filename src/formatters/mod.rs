//! Formatter implementations

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

pub use crate::core::Formatter;
