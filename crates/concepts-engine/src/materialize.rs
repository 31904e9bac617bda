//! Cluster vector materialization for diagnostics.
//!
//! Resolves the member words of every cluster into their embedding vectors
//! and finds words closest to arbitrary vectors (e.g. a cluster centroid).
//! This is not on the vectorization path.
//!
//! A member word without an embedding is an error, never a zero vector: it
//! means the vocabulary and the embedding model are out of sync.

use crate::error::{ConceptError, ConceptResult};
use crate::index::ClusterIndex;
use concepts_core::{ClusterId, WordEmbeddings};
use serde::{Deserialize, Serialize};

/// Embedding vectors of the members of one cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterVectors {
    /// Cluster these vectors belong to.
    pub cluster: ClusterId,
    /// Member words, in assignment order.
    pub words: Vec<String>,
    /// One vector per member word, parallel to `words`.
    pub vectors: Vec<Vec<f32>>,
}

impl ClusterVectors {
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Centroid-nearest word of a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLabel {
    pub cluster: ClusterId,
    /// Word closest to the cluster centroid.
    pub label: String,
    /// Number of member words.
    pub size: usize,
}

/// Resolves every cluster's members into embedding vectors, in ascending
/// cluster order.
///
/// # Errors
///
/// - [`ConceptError::EmbeddingMissing`] for the first member with no vector
/// - [`ConceptError::Collaborator`] when the embedding backend fails
pub fn clusters_as_vectors<E: WordEmbeddings + ?Sized>(
    embeddings: &E,
    index: &ClusterIndex,
) -> ConceptResult<Vec<ClusterVectors>> {
    index
        .clusters()
        .map(|(cluster, words)| -> ConceptResult<ClusterVectors> {
            let vectors = words
                .iter()
                .map(|word| -> ConceptResult<Vec<f32>> {
                    embeddings
                        .vector_of(word)?
                        .ok_or_else(|| ConceptError::EmbeddingMissing {
                            word: word.clone(),
                            cluster,
                        })
                })
                .collect::<ConceptResult<Vec<_>>>()?;

            Ok(ClusterVectors {
                cluster,
                words: words.to_vec(),
                vectors,
            })
        })
        .collect()
}

/// Returns the single word closest to `vector`.
pub fn nearest_word<E: WordEmbeddings + ?Sized>(
    embeddings: &E,
    vector: &[f32],
) -> ConceptResult<String> {
    embeddings
        .most_similar(vector, 1)?
        .into_iter()
        .next()
        .map(|(word, _)| word)
        .ok_or(ConceptError::NoNeighbors)
}

/// Mean of a cluster's member vectors, or `None` for an empty cluster.
pub fn centroid(cluster: &ClusterVectors) -> Option<Vec<f32>> {
    let first = cluster.vectors.first()?;
    let mut sum = vec![0.0f32; first.len()];

    for vector in &cluster.vectors {
        for (acc, value) in sum.iter_mut().zip(vector) {
            *acc += value;
        }
    }

    let n = cluster.vectors.len() as f32;
    Some(sum.into_iter().map(|v| v / n).collect())
}

/// Labels each non-empty cluster with the word nearest to its centroid.
pub fn describe_clusters<E: WordEmbeddings + ?Sized>(
    embeddings: &E,
    index: &ClusterIndex,
) -> ConceptResult<Vec<ClusterLabel>> {
    let clusters = clusters_as_vectors(embeddings, index)?;

    let mut labels = Vec::with_capacity(clusters.len());
    for cluster in &clusters {
        let Some(center) = centroid(cluster) else {
            tracing::debug!(cluster = %cluster.cluster, "skipping empty cluster");
            continue;
        };
        labels.push(ClusterLabel {
            cluster: cluster.cluster,
            label: nearest_word(embeddings, &center)?,
            size: cluster.len(),
        });
    }

    Ok(labels)
}
