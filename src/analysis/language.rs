//! Language tags and tokenizer selection.
//!
//! A [`Language`] names a tokenizer variant. Tags come from external input
//! (the CLI), so unrecognized values fall back to the trivial whitespace
//! tokenizer rather than failing.

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, TokenizerFactory, WhitespaceTokenizer};

/// The set of supported tokenizer selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Japanese, segmented with a morphological analyzer (`"ja"`).
    Japanese,
    /// Vietnamese, segmented on Unicode word boundaries (`"vi"`).
    Vietnamese,
    /// Any other tag: the trivial whitespace tokenizer.
    Other,
}

impl Language {
    /// Map an external language tag to a variant.
    ///
    /// Unrecognized tags select [`Language::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ja" => Language::Japanese,
            "vi" => Language::Vietnamese,
            _ => Language::Other,
        }
    }

    /// Build a tokenizer for this language.
    ///
    /// Construction is cheap; tokenizers with heavyweight resources (the
    /// Japanese segmenter) defer initialization to their first use.
    pub fn tokenizer(&self) -> Box<dyn Tokenizer> {
        match self {
            Language::Japanese => japanese_tokenizer(),
            Language::Vietnamese => {
                Box::new(crate::analysis::tokenizer::UnicodeWordTokenizer::new())
            }
            Language::Other => Box::new(WhitespaceTokenizer::new()),
        }
    }

    /// Build a factory producing one independent tokenizer per worker.
    pub fn tokenizer_factory(&self) -> TokenizerFactory {
        let language = *self;
        Arc::new(move || language.tokenizer())
    }
}

#[cfg(feature = "japanese")]
fn japanese_tokenizer() -> Box<dyn Tokenizer> {
    Box::new(crate::analysis::tokenizer::LinderaTokenizer::embedded_unidic())
}

#[cfg(not(feature = "japanese"))]
fn japanese_tokenizer() -> Box<dyn Tokenizer> {
    log::warn!("built without the `japanese` feature; using the whitespace tokenizer");
    Box::new(WhitespaceTokenizer::new())
}
