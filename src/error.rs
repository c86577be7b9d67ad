//! Error types for the lexifreq library.
//!
//! All errors are represented by the [`LexifreqError`] enum. Failures anywhere
//! in the pipeline propagate to the top-level caller; none are swallowed or
//! downgraded to warnings.
//!
//! # Examples
//!
//! ```
//! use lexifreq::error::{LexifreqError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexifreqError::analysis("tokenizer failed to initialize"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexifreq operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the message-carrying variants.
#[derive(Error, Debug)]
pub enum LexifreqError {
    /// I/O errors (opening shards, writing output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (enumeration, shard layout)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Record parsing errors (malformed JSONL lines, missing fields)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenizer resource initialization, segmentation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Aggregation-related errors (worker pool coordination)
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexifreqError.
pub type Result<T> = std::result::Result<T, LexifreqError>;

impl LexifreqError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Corpus(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Analysis(msg.into())
    }

    /// Create a new aggregation error.
    pub fn aggregation<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Aggregation(msg.into())
    }
}
