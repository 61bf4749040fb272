//! Custom error types for Unity Ledger
//!
//! This module defines the error hierarchy for the application using thiserror.
//! Every library operation returns [`LedgerResult`]; nothing is retried, and the
//! caller decides how to present the failure.

use thiserror::Error;

/// The main error type for Unity Ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Invalid configuration or selection (e.g. an unsupported report period)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record refers to an entity that does not exist
    #[error("{entity_type} not found: {identifier}")]
    Reference {
        entity_type: &'static str,
        identifier: String,
    },

    /// Underlying persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors outside the table files
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a reference error for a missing member
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::Reference {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Create a reference error for a missing transaction
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::Reference {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a reference error
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for Unity Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
