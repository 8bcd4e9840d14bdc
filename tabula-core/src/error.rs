//! Error types for the tabula core.
//!
//! This module provides the error handling strategy for the crate using
//! `thiserror` for automatic error trait implementations. Per-value parse
//! failures are *not* errors: they are expected values (`None` from the
//! locale parser) and are aggregated into classification decisions instead
//! of being escalated.

use thiserror::Error;

/// The main error type for the tabula core.
#[derive(Error, Debug)]
pub enum TabulaError {
    /// A referenced column does not exist in the table.
    #[error("Column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// A column violates the equal-length table invariant.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Error from Arrow operations.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from data source operations.
    #[error("Data source error: {message}")]
    DataSource {
        /// Type of data source (e.g., "CSV")
        source_type: String,
        /// Detailed error message
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error related to configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, TabulaError>`.
///
/// This is the standard `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, TabulaError>;

impl TabulaError {
    /// Creates a column-not-found error for the given column name.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates a data source error with the given source type and message.
    pub fn data_source(source_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataSource {
            source_type: source_type.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a data source error wrapping an underlying error.
    pub fn data_source_with(
        source_type: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataSource {
            source_type: source_type.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<serde_json::Error> for TabulaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
