//! Error types for the spamest library.
//!
//! All errors are represented by the [`SpamestError`] enum. Fallible operations
//! return the crate-wide [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use spamest::error::{Result, SpamestError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamestError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spamest operations.
#[derive(Error, Debug)]
pub enum SpamestError {
    /// I/O errors (reading corpora, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A score factor had a zero denominator.
    ///
    /// Raised by `estimate` when no positive document has been seen yet but the
    /// message still carries token evidence.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Invalid estimator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A model snapshot that violates the model invariants
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpamestError.
pub type Result<T> = std::result::Result<T, SpamestError>;

impl SpamestError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpamestError::Analysis(msg.into())
    }

    /// Create a new division by zero error.
    pub fn division_by_zero<S: Into<String>>(msg: S) -> Self {
        SpamestError::DivisionByZero(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpamestError::InvalidConfig(msg.into())
    }

    /// Create a new invalid snapshot error.
    pub fn invalid_snapshot<S: Into<String>>(msg: S) -> Self {
        SpamestError::InvalidSnapshot(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpamestError::InvalidArgument(msg.into())
    }
}
