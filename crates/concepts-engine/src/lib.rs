//! concepts-engine: Bag of Concepts vectorization
//!
//! This crate turns free-text documents into fixed-length count vectors over
//! concept clusters derived from a word-embedding space:
//! - Vocabulary building with corpus-wide rare-word filtering
//! - Cluster indexing (`word -> cluster` plus the fixed feature ordering)
//! - Document and corpus vectorization into dense or sparse feature vectors
//! - Cluster vector materialization for diagnostics
//!
//! ## Modules
//!
//! - [`vocabulary`]: Tokenization, rare-word filtering, dictionary building
//! - [`index`]: Cluster index and feature-space ordering
//! - [`vectorizer`]: Per-document counting, projection, corpus batching
//! - [`materialize`]: Cluster member embeddings and nearest-word lookup
//! - [`lemmatize`]: Built-in lemmatizers (identity, light English normalizer)
//! - [`embeddings`]: In-memory embedding table
//! - [`config`]: Vectorizer configuration from defaults or the environment
//! - [`error`]: Pipeline error types
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use concepts_engine::{DocumentVectorizer, NormalizingLemmatizer, feature_names};
//! use concepts_engine::concepts_core::{ClusterAssignment, ClusterId};
//!
//! let mut assignment = ClusterAssignment::new();
//! assignment.insert(ClusterId::new(0), ["good", "great"]);
//! assignment.insert(ClusterId::new(1), ["bad"]);
//!
//! let vectorizer = DocumentVectorizer::new(NormalizingLemmatizer::new());
//! let matrix = vectorizer.vectorize_corpus(
//!     &["The food was good, great even", "Bad service"],
//!     &assignment,
//! )?;
//!
//! assert_eq!(matrix.feature_names, feature_names(&assignment)?);
//! assert_eq!(matrix.to_dense(), vec![vec![2.0, 0.0], vec![0.0, 1.0]]);
//! ```

pub use concepts_core;

pub mod config;
pub mod embeddings;
pub mod error;
pub mod index;
pub mod lemmatize;
pub mod materialize;
pub mod vectorizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use config::{ConfigError, DEFAULT_RARE_THRESHOLD, VectorizerConfig};
pub use embeddings::EmbeddingTable;
pub use error::{ConceptError, ConceptResult};
pub use index::{ClusterIndex, feature_space};
pub use lemmatize::{IdentityLemmatizer, NormalizingLemmatizer};
pub use materialize::{
    ClusterLabel, ClusterVectors, centroid, clusters_as_vectors, describe_clusters, nearest_word,
};
pub use vectorizer::{ConceptCounts, DocumentVectorizer, feature_names};
pub use vocabulary::{
    build_dictionary, build_vocabulary, filter_rare, general_vocabulary, token_counts, tokenize,
};
