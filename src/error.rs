//! Custom error types for the excursion ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::extract::ExtractionError;
use crate::models::GroupError;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Document extraction failed at the collaborator boundary
    #[error("Extraction error: {0}")]
    Extraction(String),
}

impl LedgerError {
    /// Create a duplicate-booking error
    pub fn duplicate_booking(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Booking",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

// Implement From traits for common error types

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

impl From<GroupError> for LedgerError {
    fn from(err: GroupError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ExtractionError> for LedgerError {
    fn from(err: ExtractionError) -> Self {
        Self::Extraction(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("visitor list is empty".into());
        assert_eq!(err.to_string(), "Validation error: visitor list is empty");
    }

    #[test]
    fn test_duplicate_error() {
        let err = LedgerError::duplicate_booking("bkg-12345678");
        assert_eq!(err.to_string(), "Booking already exists: bkg-12345678");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
