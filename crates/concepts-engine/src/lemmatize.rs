//! Built-in [`Lemmatizer`] implementations.
//!
//! Production pipelines plug in a real lemmatizer. The implementations here
//! cover the two common cases that need no external model:
//!
//! - [`IdentityLemmatizer`]: the corpus is already lemmatized
//! - [`NormalizingLemmatizer`]: light English normalization using only basic
//!   string operations (Unicode word segmentation, lowercasing, punctuation
//!   stripping, stop-word removal)

use concepts_core::{CollaboratorError, Lemmatizer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Common English function words that carry no concept.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Minimum token length kept by [`NormalizingLemmatizer`].
pub const MIN_TOKEN_LENGTH: usize = 2;

/// Returns the input unchanged; for corpora that are already lemmatized.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(text.to_string())
    }
}

/// Lightweight English normalizer.
///
/// Processing steps:
/// 1. Split on Unicode word boundaries
/// 2. Convert to lowercase
/// 3. Remove punctuation (keep alphanumeric and hyphens)
/// 4. Filter by minimum length
/// 5. Remove stop words
#[derive(Debug, Clone)]
pub struct NormalizingLemmatizer {
    stop_words: HashSet<String>,
    min_length: usize,
}

impl Default for NormalizingLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizingLemmatizer {
    /// Creates a normalizer with the built-in English stop words.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_length: MIN_TOKEN_LENGTH,
        }
    }

    /// Creates a normalizer that keeps stop words.
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: HashSet::new(),
            min_length: MIN_TOKEN_LENGTH,
        }
    }

    /// Sets the minimum token length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Normalizes text into tokens.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(normalize_token)
            .filter(|token| {
                token.chars().count() >= self.min_length && !self.stop_words.contains(token)
            })
            .collect()
    }
}

impl Lemmatizer for NormalizingLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(self.tokens(text).join(" "))
    }
}

/// Lowercases a token and strips everything but alphanumerics and hyphens.
fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_input() {
        assert_eq!(IdentityLemmatizer.lemmatize("Good GREAT").unwrap(), "Good GREAT");
    }

    #[test]
    fn normalizing_basic() {
        let lemmatizer = NormalizingLemmatizer::new();
        let out = lemmatizer
            .lemmatize("The hotel was expensive, but the staff was friendly!")
            .unwrap();
        assert_eq!(out, "hotel expensive staff friendly");
    }

    #[test]
    fn normalizing_empty_and_punctuation() {
        let lemmatizer = NormalizingLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("").unwrap(), "");
        assert_eq!(lemmatizer.lemmatize("... ??? !!!").unwrap(), "");
    }

    #[test]
    fn normalizing_unicode_words() {
        let lemmatizer = NormalizingLemmatizer::new();
        assert_eq!(lemmatizer.tokens("Cafés naïve"), vec!["cafés", "naïve"]);
    }

    #[test]
    fn without_stop_words_keeps_function_words() {
        let lemmatizer = NormalizingLemmatizer::without_stop_words();
        assert_eq!(lemmatizer.tokens("the big cat"), vec!["the", "big", "cat"]);
    }

    #[test]
    fn min_length_filter() {
        let lemmatizer = NormalizingLemmatizer::without_stop_words().with_min_length(4);
        assert_eq!(lemmatizer.tokens("big cats nap daily"), vec!["cats", "daily"]);
    }
}
