//! Tokenizer implementations for text analysis.

use std::sync::Arc;

use crate::error::Result;

/// Trait for tokenizers that convert text into a sequence of token strings.
///
/// Implementations must be deterministic and free of cross-call state beyond
/// one-time resource initialization: calling `tokenize` twice with the same
/// input yields the same tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into normalized token strings.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Factory that builds a fresh tokenizer instance for each worker.
///
/// Workers never share a tokenizer: every worker thread invokes the factory
/// once and owns the result. Construction through the factory is cheap;
/// tokenizers with heavyweight resources defer initialization to the first
/// `tokenize` call.
pub type TokenizerFactory = Arc<dyn Fn() -> Box<dyn Tokenizer> + Send + Sync>;

// Individual tokenizer modules
#[cfg(feature = "japanese")]
pub mod lindera;
pub mod unicode_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
#[cfg(feature = "japanese")]
pub use lindera::LinderaTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
