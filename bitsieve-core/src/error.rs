//! Error types for bitsieve

use thiserror::Error;

/// Result type alias for bitsieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// bitsieve error types
#[derive(Error, Debug)]
pub enum SieveError {
    /// Filter parameters out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Element has no canonical byte encoding
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SieveError {
    /// Check if the error was caused by the caller's arguments
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            SieveError::InvalidParameter(_) | SieveError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for SieveError {
    fn from(err: serde_json::Error) -> Self {
        SieveError::Config(err.to_string())
    }
}
