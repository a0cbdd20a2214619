//! Error types for the Perkins library.
//!
//! All fallible operations report a [`PerkinsError`]. Decode-layer failures
//! (bad tokens, unmapped cells) are ordinary values here; the autocorrect
//! pipeline folds them into an [`Outcome`](crate::pipeline::Outcome) rather
//! than surfacing them to callers as aborts.
//!
//! # Examples
//!
//! ```
//! use perkins::error::{PerkinsError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(PerkinsError::invalid_token("'x' is not a dot digit"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Perkins operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum PerkinsError {
    /// A cell token that cannot be parsed into a set of dot positions
    /// (unknown character, duplicated dot, dot outside 1-6).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// A well-formed cell with no entry in the alphabet table.
    #[error("Unmapped cell: {0}")]
    UnmappedCell(String),

    /// A word outside the lexicon's domain (empty, or not purely alphabetic).
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    /// I/O errors (word list loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

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

/// Result type alias for operations that may fail with PerkinsError.
pub type Result<T> = std::result::Result<T, PerkinsError>;

impl PerkinsError {
    /// Create a new invalid-token error.
    pub fn invalid_token<S: Into<String>>(msg: S) -> Self {
        PerkinsError::InvalidToken(msg.into())
    }

    /// Create a new unmapped-cell error.
    pub fn unmapped_cell<S: Into<String>>(msg: S) -> Self {
        PerkinsError::UnmappedCell(msg.into())
    }

    /// Create a new invalid-word error.
    pub fn invalid_word<S: Into<String>>(msg: S) -> Self {
        PerkinsError::InvalidWord(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PerkinsError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PerkinsError::invalid_token("unknown character 'x'");
        assert_eq!(error.to_string(), "Invalid token: unknown character 'x'");

        let error = PerkinsError::unmapped_cell("dots 246");
        assert_eq!(error.to_string(), "Unmapped cell: dots 246");

        let error = PerkinsError::invalid_word("empty word");
        assert_eq!(error.to_string(), "Invalid word: empty word");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let perkins_error = PerkinsError::from(io_error);

        match perkins_error {
            PerkinsError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
