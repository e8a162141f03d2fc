//! Error Taxonomy
//!
//! Failures are split by blast radius. Per-token and per-link failures
//! (`SynonymLookupError`, `TemplateParseError`) are recovered where they occur
//! and never reach the client. Only `EmptyQueryError` and `TokenizationError`
//! abort a request; both are carried to the HTTP layer through `SearchError`.

use axum::http::StatusCode;
use thiserror::Error;

/// The caller supplied no phrase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Query is empty.")]
pub struct EmptyQueryError;

/// The tokenizer could not split the phrase into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to tokenize phrase: {reason}")]
pub struct TokenizationError {
    pub reason: String,
}

/// A synonym lookup for a single word failed.
#[derive(Debug, Error)]
pub enum SynonymLookupError {
    #[error("synonym request for '{word}' failed: {source}")]
    Transport {
        word: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("synonym service returned {status} for '{word}'")]
    Status { word: String, status: StatusCode },

    #[error("invalid synonym payload for '{word}': {source}")]
    Decode {
        word: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("synonym lookup for '{word}' failed: {reason}")]
    Provider { word: String, reason: String },
}

/// A URL template could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid URL template '{template}': {reason}")]
pub struct TemplateParseError {
    pub template: String,
    pub reason: String,
}

/// Invalid service configuration, detected at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("max_variations must be at least 1")]
    ZeroVariations,

    #[error("lookup timeout must be greater than zero")]
    ZeroTimeout,

    #[error("at least one URL template is required")]
    NoTemplates,
}

/// Errors that abort a search request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    EmptyQuery(#[from] EmptyQueryError),

    #[error(transparent)]
    Tokenization(#[from] TokenizationError),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::EmptyQuery(_) => StatusCode::BAD_REQUEST,
            SearchError::Tokenization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text sent to the client. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            SearchError::EmptyQuery(e) => e.to_string(),
            SearchError::Tokenization(_) => "Internal server error.".to_string(),
        }
    }
}
