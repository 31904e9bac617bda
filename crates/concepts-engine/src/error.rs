//! Error types for the vectorization pipeline.

use concepts_core::{AssignmentError, ClusterId, CollaboratorError};

/// Result type alias for pipeline operations.
pub type ConceptResult<T> = Result<T, ConceptError>;

/// Errors that can occur while indexing, vectorizing, or materializing.
///
/// Unmapped tokens are not errors; they are dropped before counting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConceptError {
    /// The assignment has no clusters, which would yield a zero-width feature space.
    #[error("cluster assignment is empty")]
    EmptyAssignment,

    /// Cluster ids must be exactly `0..N`.
    #[error("cluster ids are not contiguous from 0: expected {expected}, found {found}")]
    NonContiguousClusters { expected: ClusterId, found: ClusterId },

    /// Clustering labels could not be turned into an assignment.
    #[error("invalid cluster labels: {0}")]
    InvalidLabels(#[from] AssignmentError),

    /// A cluster member has no embedding; the vocabulary and the embedding
    /// model are out of sync.
    #[error("word '{word}' in {cluster} has no embedding vector")]
    EmbeddingMissing { word: String, cluster: ClusterId },

    /// The embedding model returned no neighbours for a query vector.
    #[error("embedding model returned no neighbours")]
    NoNeighbors,

    /// A lemmatizer or embedding backend failed.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
