//! Locale configuration, loaded from a JSON resource.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

/// Translation engine initialization options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Explicit language override. When absent the system locale is used.
    pub language: Option<String>,
    /// Language whose catalog answers for keys missing in the current one.
    pub fallback_language: String,
    /// Catalog namespaces to load for each locale.
    pub namespaces: Vec<String>,
    pub interpolation: Interpolation,
}

/// Options for value interpolation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interpolation {
    /// HTML-escape interpolated values. On by default; hosts that render
    /// into trusted markup turn it off.
    pub escape_value: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: None,
            fallback_language: "en-US".to_string(),
            namespaces: vec!["translation".to_string(), "common".to_string()],
            interpolation: Interpolation::default(),
        }
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation { escape_value: true }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, EngineError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fallback_language, "en-US");
        assert_eq!(config.namespaces, ["translation", "common"]);
        assert!(config.interpolation.escape_value);
        assert!(config.language.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "language": "de",
                "fallbackLanguage": "en-US",
                "namespaces": ["translation"],
                "interpolation": { "escapeValue": false }
            }"#,
        )
        .unwrap();
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.namespaces, ["translation"]);
        assert!(!config.interpolation.escape_value);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.fallback_language, "en-US");
        assert!(config.interpolation.escape_value);
    }
}
