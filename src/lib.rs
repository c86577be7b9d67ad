//! # lexifreq
//!
//! Parallel word-frequency extraction from sharded JSONL corpora.
//!
//! ## Features
//!
//! - Pluggable, language-specific tokenizers
//! - Fixed-size worker pool with ordered result aggregation
//! - Minimum-occurrence frequency filtering
//! - Deterministic, sorted JSON output

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod parallel;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::analysis::Language;
    pub use crate::analysis::tokenizer::{Tokenizer, TokenizerFactory};
    pub use crate::corpus::counts::TermCounts;
    pub use crate::corpus::word_frequencies;
    pub use crate::error::{LexifreqError, Result};
    pub use crate::parallel::config::AggregatorConfig;
    pub use crate::parallel::progress::{ConsoleProgress, NullProgress, ProgressReport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
