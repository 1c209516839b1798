//! Custom error types for split-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for split-ledger operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors (missing or malformed config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and record data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors while sealing data (cipher setup, serialization before encrypt)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The authentication tag did not verify.
    ///
    /// Carries no detail: a wrong password and tampered bytes are
    /// indistinguishable from this error alone.
    #[error("authentication tag verification failed")]
    Authentication,

    /// The ledger container could not be read back.
    ///
    /// Deliberately opaque: wraps tag failures, truncated files, and
    /// post-decrypt parse failures without exposing which check failed.
    #[error("unable to read the ledger: the file may be corrupted or the password may be wrong")]
    Decryption,
}

impl SplitError {
    /// Check if this is the opaque decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for split-ledger operations
pub type SplitResult<T> = Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_decryption_error_is_opaque() {
        let err = SplitError::Decryption;
        let msg = err.to_string();
        // One message for every failure mode: no oracle for password guessing
        assert!(msg.contains("corrupted or the password may be wrong"));
        assert!(err.is_decryption());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let split_err: SplitError = io_err.into();
        assert!(matches!(split_err, SplitError::Io(_)));
    }
}
