//! Error types for the stoplist library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StoplistError`] enum. In practice only loading a stop-word file can fail
//! at runtime; the normalizer, the filters and the frequency deriver are total
//! over their inputs.
//!
//! # Examples
//!
//! ```
//! use stoplist::error::{Result, StoplistError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StoplistError::invalid_config("document_ratio must not be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stoplist operations.
#[derive(Error, Debug)]
pub enum StoplistError {
    /// I/O errors (missing stop-word file, permissions, invalid UTF-8)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (char filters, tokenizers, token filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Rejected configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StoplistError.
pub type Result<T> = std::result::Result<T, StoplistError>;

impl StoplistError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StoplistError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StoplistError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StoplistError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StoplistError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = StoplistError::invalid_config("ratio is NaN");
        assert_eq!(error.to_string(), "Invalid configuration: ratio is NaN");

        let error = StoplistError::other("something else");
        assert_eq!(error.to_string(), "Error: something else");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stoplist_error = StoplistError::from(io_error);

        match stoplist_error {
            StoplistError::Io(ref e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let stoplist_error = StoplistError::from(json_error);
        assert!(matches!(stoplist_error, StoplistError::Json(_)));
    }
}
