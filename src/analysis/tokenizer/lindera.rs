//! Japanese tokenizer backed by the lindera morphological segmenter.
//!
//! Dictionary loading is expensive, so the segmenter is not constructed until
//! the first `tokenize` call. Each tokenizer instance owns its own segmenter;
//! instances are built independently per worker and never shared.

use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use once_cell::sync::OnceCell;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{LexifreqError, Result};

/// A tokenizer that segments Japanese text with lindera.
///
/// Construction only records the configuration; the segmenter (and the
/// dictionary behind it) is loaded lazily on the first `tokenize` call and
/// reused for every call after that. Initialization failure surfaces as an
/// `Analysis` error from `tokenize` rather than being swallowed.
pub struct LinderaTokenizer {
    mode: String,
    dict_uri: String,
    user_dict_uri: Option<String>,
    segmenter: OnceCell<Segmenter>,
}

impl LinderaTokenizer {
    /// Create a new lindera tokenizer with the given configuration.
    pub fn new(mode: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Self {
        LinderaTokenizer {
            mode: mode.to_string(),
            dict_uri: dict_uri.to_string(),
            user_dict_uri: user_dict_uri.map(|uri| uri.to_string()),
            segmenter: OnceCell::new(),
        }
    }

    /// Create a tokenizer over the embedded UniDic dictionary in normal mode.
    pub fn embedded_unidic() -> Self {
        Self::new("normal", "embedded://unidic", None)
    }

    /// Get the segmenter, constructing it on first use.
    fn segmenter(&self) -> Result<&Segmenter> {
        self.segmenter.get_or_try_init(|| {
            let mode = Mode::from_str(&self.mode).map_err(|e| {
                LexifreqError::analysis(format!("Invalid mode '{}': {}", self.mode, e))
            })?;
            let dict = load_dictionary(&self.dict_uri)
                .map_err(|e| LexifreqError::analysis(format!("Failed to load dictionary: {}", e)))?;
            let metadata = &dict.metadata;
            let user_dict = match &self.user_dict_uri {
                Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                    LexifreqError::analysis(format!("Failed to load user dictionary: {}", e))
                })?),
                None => None,
            };

            Ok(Segmenter::new(mode, dict, user_dict))
        })
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let segmenter = self.segmenter()?;

        let mut tokens = Vec::new();
        for token in segmenter
            .segment(Cow::Borrowed(text))
            .map_err(|e| LexifreqError::analysis(format!("Failed to segment text: {}", e)))?
        {
            tokens.push(token.surface.into());
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
