//! Error types for directive parsing and engine initialization.

use thiserror::Error;

/// Errors that can occur when parsing a format directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("empty format directive")]
    Empty,

    #[error("unknown directive type '{0}'")]
    UnknownType(String),

    #[error("unknown date/time granularity '{0}'")]
    UnknownGranularity(String),

    #[error("DATETIME directive is missing a granularity keyword")]
    MissingGranularity,

    #[error("PRICE directive is missing a currency code")]
    MissingCurrency,
}

/// Errors that can occur when loading configuration or initializing the
/// translation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read locale configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid locale configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid language identifier '{0}'")]
    Language(String),

    #[error("invalid translation resource '{path}': {reason}")]
    Resource { path: String, reason: String },

    #[error("no translation catalog for fallback language '{0}'")]
    MissingFallback(String),
}
