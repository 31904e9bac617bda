//! Vocabulary building from a raw corpus.
//!
//! The vocabulary is the set of tokens that occur more than once across the
//! whole corpus. Filtering is global: a token seen once in each of two
//! documents has frequency 2 and survives in both.
//!
//! Every function here is pure and returns fresh collections.

use crate::config::DEFAULT_RARE_THRESHOLD;
use concepts_core::Vocabulary;
use std::collections::HashMap;

/// Splits each document on whitespace.
pub fn tokenize<S: AsRef<str>>(corpus: &[S]) -> Vec<Vec<String>> {
    corpus
        .iter()
        .map(|document| {
            document
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Computes the global frequency of every token across all documents.
pub fn token_counts(token_sequences: &[Vec<String>]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in token_sequences.iter().flatten() {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    counts
}

/// Removes, from every document, tokens whose global frequency is at most
/// `threshold`.
pub fn filter_rare(token_sequences: &[Vec<String>], threshold: usize) -> Vec<Vec<String>> {
    let counts = token_counts(token_sequences);

    token_sequences
        .iter()
        .map(|tokens| {
            tokens
                .iter()
                .filter(|token| counts.get(token.as_str()).copied().unwrap_or(0) > threshold)
                .cloned()
                .collect()
        })
        .collect()
}

/// Deduplicates tokens across all documents into a sorted vocabulary.
pub fn build_dictionary(token_sequences: &[Vec<String>]) -> Vocabulary {
    Vocabulary::from_words(token_sequences.iter().flatten().cloned())
}

/// Tokenizes, drops rare tokens with the given threshold, and builds the
/// vocabulary.
pub fn build_vocabulary<S: AsRef<str>>(corpus: &[S], threshold: usize) -> Vocabulary {
    let tokenized = tokenize(corpus);
    let filtered = filter_rare(&tokenized, threshold);
    let vocabulary = build_dictionary(&filtered);

    if vocabulary.is_empty() && !corpus.is_empty() {
        tracing::warn!(
            documents = corpus.len(),
            threshold,
            "vocabulary is empty after rare-word filtering"
        );
    } else {
        tracing::debug!(
            documents = corpus.len(),
            words = vocabulary.len(),
            "built vocabulary"
        );
    }

    vocabulary
}

/// Builds the general vocabulary of a corpus, dropping singleton tokens.
pub fn general_vocabulary<S: AsRef<str>>(corpus: &[S]) -> Vocabulary {
    build_vocabulary(corpus, DEFAULT_RARE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokenized = tokenize(&["a  b\tc", "", "d\n"]);
        assert_eq!(tokenized, vec![vec!["a", "b", "c"], vec![], vec!["d"]]);
    }

    #[test]
    fn token_counts_are_global() {
        let tokenized = tokenize(&["a b b", "a c"]);
        let counts = token_counts(&tokenized);

        assert_eq!(counts["a"], 2);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["c"], 1);
    }

    #[test]
    fn filter_rare_drops_singletons_everywhere() {
        let tokenized = tokenize(&["a b b", "a c"]);
        let filtered = filter_rare(&tokenized, 1);

        assert_eq!(filtered, vec![vec!["a", "b", "b"], vec!["a"]]);
    }

    #[test]
    fn filter_rare_keeps_tokens_split_across_documents() {
        let tokenized = tokenize(&["x only", "x also"]);
        let filtered = filter_rare(&tokenized, 1);

        assert_eq!(filtered, vec![vec!["x"], vec!["x"]]);
    }

    #[test]
    fn filter_rare_with_higher_threshold() {
        let tokenized = tokenize(&["a a a b b", "c"]);
        let filtered = filter_rare(&tokenized, 2);

        assert_eq!(filtered, vec![vec!["a", "a", "a"], vec![]]);
    }

    #[test]
    fn general_vocabulary_example() {
        let vocab = general_vocabulary(&["a b b", "a c"]);

        assert!(vocab.contains("a"));
        assert!(vocab.contains("b"));
        assert!(!vocab.contains("c"));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn vocabulary_is_sorted_and_deterministic() {
        let corpus = ["zeta alpha mid", "mid zeta alpha", "alpha"];
        let first = general_vocabulary(&corpus);
        let second = general_vocabulary(&corpus);

        assert_eq!(first.as_slice(), ["alpha", "mid", "zeta"]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_corpus_gives_empty_vocabulary() {
        let corpus: [&str; 0] = [];
        assert!(general_vocabulary(&corpus).is_empty());
    }
}
