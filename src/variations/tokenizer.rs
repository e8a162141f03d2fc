use crate::error::TokenizationError;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a phrase into its word tokens.
///
/// Implementations must return tokens in order of appearance, keep repeated
/// words once per occurrence and never yield an empty token.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, phrase: &str) -> Result<Vec<String>, TokenizationError>;
}

/// Word segmentation following Unicode UAX #29.
///
/// Punctuation and whitespace are dropped, case is preserved so that every
/// token can be found verbatim in the phrase it came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, phrase: &str) -> Result<Vec<String>, TokenizationError> {
        Ok(phrase
            .unicode_words()
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect())
    }
}
