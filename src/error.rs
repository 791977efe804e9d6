//! Custom error types for the invoice helper
//!
//! Operator typos never surface here; they are handled by re-prompting in the
//! session. This error type covers the infrastructure around the session:
//! console I/O, settings files and catalog configuration.

use thiserror::Error;

/// The main error type for invoice helper operations
#[derive(Error, Debug)]
pub enum InvoiceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for configured values
    #[error("Validation error: {0}")]
    Validation(String),

    /// A job type label that is not part of the catalog
    #[error("Unknown job type: {0}")]
    UnknownJobType(String),
}

impl From<std::io::Error> for InvoiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InvoiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for invoice helper operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvoiceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_job_type() {
        let err = InvoiceError::UnknownJobType("Towing".into());
        assert_eq!(err.to_string(), "Unknown job type: Towing");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: InvoiceError = io_err.into();
        assert!(matches!(err, InvoiceError::Io(_)));
    }
}
