//! concepts-core: Core types for Bag of Concepts vectorization
//!
//! This crate provides:
//! - Identifier and data types shared by the vectorization pipeline
//! - Feature vector and matrix representations (dense and sparse)
//! - Collaborator traits for lemmatization and word embeddings
//!
//! ## Modules
//!
//! - [`types`]: Cluster ids, cluster assignments, vocabularies, feature vectors
//! - [`collaborators`]: `Lemmatizer` and `WordEmbeddings` boundary traits

pub mod collaborators;
pub mod types;

pub use collaborators::{CollaboratorError, Lemmatizer, WordEmbeddings};
pub use types::{
    AssignmentError, ClusterAssignment, ClusterId, FeatureMatrix, FeatureVector, Representation,
    SparseVector, Vocabulary,
};
