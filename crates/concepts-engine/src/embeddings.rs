//! In-memory word embedding table.
//!
//! [`EmbeddingTable`] implements [`WordEmbeddings`] over a plain map of word
//! vectors, with brute-force cosine similarity for nearest-neighbour queries.
//! It is meant for diagnostics on modest vocabularies and for tests; large
//! models should be served by a dedicated collaborator.

use concepts_core::{CollaboratorError, WordEmbeddings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word vectors keyed by word, all with the same dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<f32>>", into = "BTreeMap<String, Vec<f32>>")]
pub struct EmbeddingTable {
    vectors: BTreeMap<String, Vec<f32>>,
    dimension: usize,
}

impl EmbeddingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a word vector.
    ///
    /// Fails when the vector dimension differs from the vectors already
    /// stored.
    pub fn insert(
        &mut self,
        word: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<(), CollaboratorError> {
        let word = word.into();
        if self.vectors.is_empty() {
            self.dimension = vector.len();
        } else if vector.len() != self.dimension {
            return Err(CollaboratorError::new(
                "embeddings",
                format!(
                    "vector for '{word}' has dimension {}, expected {}",
                    vector.len(),
                    self.dimension
                ),
            ));
        }
        self.vectors.insert(word, vector);
        Ok(())
    }

    /// Dimension of the stored vectors (0 when empty).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Vec<f32>>> for EmbeddingTable {
    type Error = CollaboratorError;

    fn try_from(vectors: BTreeMap<String, Vec<f32>>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (word, vector) in vectors {
            table.insert(word, vector)?;
        }
        Ok(table)
    }
}

impl From<EmbeddingTable> for BTreeMap<String, Vec<f32>> {
    fn from(table: EmbeddingTable) -> Self {
        table.vectors
    }
}

impl WordEmbeddings for EmbeddingTable {
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, CollaboratorError> {
        Ok(self.vectors.get(word).cloned())
    }

    fn most_similar(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<(String, f32)>, CollaboratorError> {
        if !self.vectors.is_empty() && vector.len() != self.dimension {
            return Err(CollaboratorError::new(
                "embeddings",
                format!(
                    "query has dimension {}, expected {}",
                    vector.len(),
                    self.dimension
                ),
            ));
        }

        let mut scored: Vec<(String, f32)> = self
            .vectors
            .iter()
            .map(|(word, candidate)| (word.clone(), cosine_similarity(vector, candidate)))
            .collect();

        // Stable sort keeps alphabetical order among ties.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
