//! Structured logging context for key-value fields
//!
//! A [`LogContext`] is an insertion-ordered mapping from field names to
//! arbitrary JSON values. Loggers carry a base context and callers may supply
//! a per-call context; the two are merged with per-call keys winning.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Context for structured logging with key-value fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogContext {
    fields: Map<String, Value>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a single field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get all fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Overlay `other` onto this context.
    ///
    /// Existing keys keep their position and take the value from `other`;
    /// keys new to this context are appended in `other`'s order.
    pub fn extend(&mut self, other: &LogContext) {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Produce a new context with `overrides` laid over `self`
    #[must_use]
    pub fn merged(&self, overrides: &LogContext) -> LogContext {
        let mut merged = self.clone();
        merged.extend(overrides);
        merged
    }

    /// Render as 2-space indented JSON
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for LogContext {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = LogContext::new();
        for (key, value) in iter {
            context.add_field(key, value);
        }
        context
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.fields.clone()))
    }
}
