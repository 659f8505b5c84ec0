//! Serializable logger settings
//!
//! [`LoggerSettings`] is a plain data document (for example loaded from a
//! JSON config file) that resolves into a [`LoggerConfig`]. Fields left out
//! of the document fall back to the factory defaults.

use super::{
    error::{LoggerError, Result},
    log_context::LogContext,
    log_level::LogLevel,
    logger::LoggerConfig,
};
use crate::formatters::{HumanFormatter, JsonFormatter};
use serde::{Deserialize, Serialize};

/// Formatter selection in a settings document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Human,
    Json,
}

/// Logger settings as they appear in configuration files
///
/// # Example
///
/// ```
/// use structured_logger::core::LoggerSettings;
///
/// let settings = LoggerSettings::from_json_str(
///     r#"{"level": "warn", "format": "json", "context": {"service": "billing"}}"#,
/// ).unwrap();
/// let config = settings.to_config().unwrap();
/// assert_eq!(config.format.unwrap().name(), "json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    /// Level label, case-insensitive; `None` keeps the default level
    pub level: Option<String>,
    pub format: FormatKind,
    /// Only meaningful with `format = "json"`
    pub pretty: bool,
    pub context: LogContext,
}

impl LoggerSettings {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn parsed_level(&self) -> Result<Option<LogLevel>> {
        self.level
            .as_deref()
            .map(|label| {
                label
                    .parse::<LogLevel>()
                    .map_err(|message| LoggerError::settings("level", message))
            })
            .transpose()
    }

    /// Resolve into a partial [`LoggerConfig`]; the transport is left unset
    pub fn to_config(&self) -> Result<LoggerConfig> {
        let mut config = LoggerConfig::new();
        if let Some(level) = self.parsed_level()? {
            config = config.level(level);
        }

        config = match (self.format, self.pretty) {
            (FormatKind::Human, true) => {
                return Err(LoggerError::settings(
                    "pretty",
                    "only applies to the json format",
                ))
            }
            (FormatKind::Human, false) => config.format(HumanFormatter::new()),
            (FormatKind::Json, pretty) => config.format(JsonFormatter::with_pretty(pretty)),
        };

        if !self.context.is_empty() {
            config = config.context(self.context.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = LoggerSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, LoggerSettings::default());

        let config = settings.to_config().unwrap();
        assert!(config.level.is_none());
        assert_eq!(config.format.unwrap().name(), "human");
        assert!(config.context.is_none());
    }

    #[test]
    fn test_full_document() {
        let settings = LoggerSettings::from_json_str(concat!(
            r#"{"level":"DEBUG","format":"json","pretty":true,"#,
            r#""context":{"service":"api","port":8080}}"#,
        ))
        .unwrap();

        let config = settings.to_config().unwrap();
        assert_eq!(config.level, Some(LogLevel::Debug));
        assert_eq!(config.format.unwrap().name(), "json");
        assert_eq!(config.context.unwrap().to_string(), r#"{"service":"api","port":8080}"#);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let settings = LoggerSettings::from_json_str(r#"{"level":"verbose"}"#).unwrap();
        let err = settings.to_config().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidSettings { ref field, .. } if field == "level"));
    }

    #[test]
    fn test_pretty_requires_json() {
        let settings = LoggerSettings {
            pretty: true,
            ..Default::default()
        };
        assert!(matches!(
            settings.to_config(),
            Err(LoggerError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = LoggerSettings::from_json_str(r#"{"rotation":"daily"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
