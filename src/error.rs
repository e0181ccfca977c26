//! Error types for the Orthos library.
//!
//! This module provides error handling for all Orthos operations. All errors
//! are represented by the [`OrthosError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use orthos::error::{OrthosError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(OrthosError::config("Invalid input"))
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

/// The main error type for Orthos operations.
///
/// This enum represents all possible errors that can occur in the Orthos
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (vocabulary or document sources, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, normalization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

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

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrthosError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        OrthosError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrthosError::analysis("bad pattern");
        assert_eq!(err.to_string(), "Analysis error: bad pattern");

        let err = OrthosError::config("unknown format");
        assert_eq!(err.to_string(), "Configuration error: unknown format");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing vocabulary");
        let err: OrthosError = io_err.into();
        assert!(matches!(err, OrthosError::Io(_)));
    }
}
