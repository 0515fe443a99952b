//! Error types for price_lookup

use axum::http::StatusCode;
use thiserror::Error;

/// Failure to build a catalog from its source
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source missing, unreadable, or not a JSON array of records
    #[error("Catalog source unavailable ({source_name}): {reason}")]
    SourceUnavailable { source_name: String, reason: String },
    /// A record could not be coerced to the expected shape
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Failure of a single closest-price search
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No catalog loaded, or the loaded catalog is empty
    #[error("No catalog available")]
    CatalogUnavailable,
    /// Missing or blank input
    #[error("Empty price input")]
    EmptyInput,
    /// Input is not a finite decimal number after normalization
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

impl SearchError {
    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::CatalogUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::EmptyInput | SearchError::InvalidNumber(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message shown to the end user
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::CatalogUnavailable => "data load failure",
            SearchError::EmptyInput => "please enter a price",
            SearchError::InvalidNumber(_) => "please enter a valid number",
        }
    }
}

/// Result alias for catalog loading
pub type Result<T> = std::result::Result<T, LoadError>;
