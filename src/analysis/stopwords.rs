use std::collections::HashSet;

use crate::analysis::tokenizer::{is_valid_word, split_ascii_whitespace};
use crate::core::error::{Error, Result};

/// Immutable set of stop words, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    /// Builds a stop-word set from any collection of strings, validating
    /// each one. Duplicate and empty entries are silently collapsed/dropped.
    pub fn from_iter<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "stop word {word:?} is invalid"
                )));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords(set))
    }

    /// Builds a stop-word set from a single whitespace-separated string.
    pub fn from_str(text: &str) -> Result<Self> {
        Self::from_iter(split_ascii_whitespace(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_stop_words() {
        let err = StopWords::from_iter(["и", "в\u{0001}"]).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn from_str_splits_and_dedupes() {
        let stop_words = StopWords::from_str("и в на в").unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("и"));
        assert!(stop_words.contains("на"));
    }

    #[test]
    fn empty_string_yields_empty_set() {
        let stop_words = StopWords::from_str("   ").unwrap();
        assert!(stop_words.is_empty());
    }
}
