//! Error types for rowsift.

use thiserror::Error;

/// Result type for rowsift operations.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while filtering or reshaping tables.
///
/// Empty inputs, unmatched searches and unparsable column specifiers are not
/// errors; they are represented in the returned values.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Input was not organized as rows of cells.
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    /// The HTML splitter was called without any tag names to split by.
    #[error("No target tags given: at least one tag name is required to split by")]
    EmptyTargetTags,

    /// A data shape conversion has no rule.
    #[error("Conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: String, to: String },

    /// A search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Create an input shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::InvalidInputShape(message.into())
    }

    /// Create an unsupported conversion error.
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}
