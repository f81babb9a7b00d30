//! Error types for the estimator.

use std::path::PathBuf;
use std::time::Duration;

/// Errors raised while validating input or computing an estimate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// Missing or unrecognized field value, or a value out of range.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl EstimateError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading configuration or a rate table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// The rate table file could not be read.
    #[error("Failed to read rate table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rate table is not valid JSON for the expected shape.
    #[error("Malformed rate table: {0}")]
    Json(#[from] serde_json::Error),

    /// The rate table parsed but violates a table invariant.
    #[error("Invalid rate table: {reason}")]
    InvalidTable { reason: String },
}

/// Errors from a market data provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketDataError {
    #[error("Market data request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Market data unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
