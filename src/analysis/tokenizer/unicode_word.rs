//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29) and lower-cases the result. It handles
//! international text and filters out non-word segments like punctuation and
//! whitespace. It serves the Vietnamese language tag, where the corpus text
//! is space-separated syllables.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Segments that contain no alphanumeric character (pure punctuation or
/// whitespace) are discarded; the remaining words are lower-cased.
///
/// # Examples
///
/// ```
/// use lexifreq::analysis::tokenizer::Tokenizer;
/// use lexifreq::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens = tokenizer.tokenize("Xin chào, thế giới!").unwrap();
/// assert_eq!(tokens, vec!["xin", "chào", "thế", "giới"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split_word_bounds()
            .filter_map(|word| {
                // Only keep actual words (not whitespace or punctuation)
                if word.chars().any(|c| c.is_alphanumeric()) {
                    Some(word.to_lowercase())
                } else {
                    None
                }
            })
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("hello, world!").unwrap();

        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_lowercasing() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("Hà Nội").unwrap();

        assert_eq!(tokens, vec!["hà", "nội"]);
    }

    #[test]
    fn test_punctuation_only_input() {
        let tokenizer = UnicodeWordTokenizer::new();

        assert!(tokenizer.tokenize("... !!! ---").unwrap().is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
