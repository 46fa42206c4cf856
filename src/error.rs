//! Error types for the concord library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ConcordError`] enum.
//!
//! # Examples
//!
//! ```
//! use concord::error::{ConcordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordError::invalid_argument("search term must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for concord operations.
///
/// Argument validation happens before any tokenization work begins, so an
/// [`ConcordError::InvalidArgument`] never leaves partial results behind.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// Caller error: empty search term, unknown mode literal, or a zero
    /// context window.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Annotation-related errors. Annotation is total for valid token input;
    /// this variant is reserved for unrecoverable tagger faults.
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// I/O errors (file reading in the CLI layer).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ConcordError.
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordError::InvalidArgument(msg.into())
    }

    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        ConcordError::Annotation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ConcordError::invalid_argument("empty term");
        assert_eq!(error.to_string(), "Invalid argument: empty term");

        let error = ConcordError::annotation("tagger fault");
        assert_eq!(error.to_string(), "Annotation error: tagger fault");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ConcordError::from(io_error);

        match error {
            ConcordError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
