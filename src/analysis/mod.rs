//! Text analysis module for lexifreq.
//!
//! This module provides the tokenization capabilities used by the counting
//! pipeline: the [`tokenizer::Tokenizer`] trait, its language-specific
//! implementations, and the [`Language`] tag that selects among them.

pub mod language;
pub mod tokenizer;

// Re-export commonly used types
pub use language::*;
pub use tokenizer::*;
