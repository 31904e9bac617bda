//! Boundary traits for the external capabilities the pipeline consumes.
//!
//! Lemmatization and word embeddings are provided by collaborators outside
//! this workspace. Both traits are synchronous and require `Send + Sync` so a
//! single collaborator can be shared across worker threads during corpus
//! vectorization.

use std::sync::Arc;

/// Failure reported by an external collaborator.
///
/// The pipeline never retries; the error is propagated to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{collaborator} failed: {message}")]
pub struct CollaboratorError {
    /// Name of the failing collaborator (e.g. "lemmatizer").
    pub collaborator: String,
    /// Human-readable cause.
    pub message: String,
}

impl CollaboratorError {
    pub fn new(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }
}

/// Text normalization into whitespace-joined lemma tokens.
pub trait Lemmatizer: Send + Sync {
    /// Maps a document to a whitespace-joined sequence of lemmas.
    fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Pretrained word-embedding space.
pub trait WordEmbeddings: Send + Sync {
    /// Returns the embedding of a word, or `None` when the word is not in the
    /// embedding vocabulary.
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, CollaboratorError>;

    /// Returns up to `k` nearest words to `vector`, most similar first.
    fn most_similar(&self, vector: &[f32], k: usize)
    -> Result<Vec<(String, f32)>, CollaboratorError>;
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for &T {
    fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
        (**self).lemmatize(text)
    }
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for Arc<T> {
    fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
        (**self).lemmatize(text)
    }
}

impl<T: WordEmbeddings + ?Sized> WordEmbeddings for &T {
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, CollaboratorError> {
        (**self).vector_of(word)
    }

    fn most_similar(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<(String, f32)>, CollaboratorError> {
        (**self).most_similar(vector, k)
    }
}

impl<T: WordEmbeddings + ?Sized> WordEmbeddings for Arc<T> {
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, CollaboratorError> {
        (**self).vector_of(word)
    }

    fn most_similar(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<(String, f32)>, CollaboratorError> {
        (**self).most_similar(vector, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Lemmatizer for Upper {
        fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn collaborator_error_display() {
        let err = CollaboratorError::new("lemmatizer", "backend unreachable");
        assert_eq!(err.to_string(), "lemmatizer failed: backend unreachable");
    }

    #[test]
    fn lemmatizer_through_arc_and_ref() {
        let shared: Arc<dyn Lemmatizer> = Arc::new(Upper);
        assert_eq!(shared.lemmatize("abc").unwrap(), "ABC");

        let by_ref = &Upper;
        assert_eq!(Lemmatizer::lemmatize(&by_ref, "xy").unwrap(), "XY");
    }
}
