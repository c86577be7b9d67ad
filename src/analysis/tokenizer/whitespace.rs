//! Whitespace tokenizer implementation.
//!
//! The simplest tokenizer variant: splits on single spaces, lower-cases, and
//! strips edge punctuation. Useful for testing and as the fallback for
//! unrecognized language tags.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on single space characters.
///
/// Each fragment is lower-cased and stripped of leading and trailing ASCII
/// punctuation and whitespace. Fragments that become empty after stripping
/// (for example a fragment that was pure punctuation) are dropped.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Normalize one fragment: strip edge punctuation/whitespace, lower-case.
    fn normalize(fragment: &str) -> Option<String> {
        let stripped =
            fragment.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_lowercase())
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split(' ').filter_map(Self::normalize).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("the quick brown fox").unwrap();

        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_lowercase_and_strip_punctuation() {
        let tokenizer = WhitespaceTokenizer::new();

        assert_eq!(tokenizer.tokenize("Hello,").unwrap(), vec!["hello"]);
        assert_eq!(
            tokenizer.tokenize("\"Quoted\" (Parens)").unwrap(),
            vec!["quoted", "parens"]
        );
    }

    #[test]
    fn test_interior_punctuation_is_kept() {
        let tokenizer = WhitespaceTokenizer::new();

        assert_eq!(tokenizer.tokenize("don't stop").unwrap(), vec!["don't", "stop"]);
    }

    #[test]
    fn test_empty_fragments_are_dropped() {
        let tokenizer = WhitespaceTokenizer::new();

        // Double space produces an empty fragment; "--" strips to nothing.
        assert_eq!(tokenizer.tokenize("a  b -- c").unwrap(), vec!["a", "b", "c"]);
        assert!(tokenizer.tokenize("...").unwrap().is_empty());
        assert!(tokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        let tokenizer = WhitespaceTokenizer::new();

        assert_eq!(
            tokenizer.tokenize("Café RÉSUMÉ").unwrap(),
            vec!["café", "résumé"]
        );
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
