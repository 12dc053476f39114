//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;

/// Errors emitted while reading source configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid source url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported source url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("invalid fetch timeout: {0}")]
    InvalidTimeout(String),
}

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question source returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("question source did not return a JSON array")]
    NotAnArray,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted when building a quiz session from a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for the quiz")]
    Empty,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Load(#[from] LoadError),
}
