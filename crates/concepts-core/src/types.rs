//! Core data types for Bag of Concepts vectorization.
//!
//! This module defines the plain in-memory structures that flow through the
//! pipeline:
//!
//! - Cluster identifiers and the `cluster id -> words` assignment produced by
//!   an external clustering step
//! - The filtered vocabulary built from a raw corpus
//! - Feature vectors and matrices, in dense or sparse form
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` so that a
//! collaborator store can persist them as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a concept cluster.
///
/// Well-formed assignments use contiguous ids starting at zero, so the raw
/// value doubles as the column index of the cluster in a feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(pub u64);

impl ClusterId {
    /// Creates a new ClusterId from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster-{}", self.0)
    }
}

impl From<u64> for ClusterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Cluster Assignment
// ============================================================================

/// Errors raised while building an assignment from raw clustering labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    /// Labels and words must be parallel sequences.
    #[error("label count {labels} does not match word count {words}")]
    LengthMismatch { labels: usize, words: usize },

    /// A label referenced a cluster outside `0..n_clusters`.
    #[error("label {label} for word '{word}' is out of range for {n_clusters} clusters")]
    LabelOutOfRange {
        label: usize,
        word: String,
        n_clusters: usize,
    },
}

/// Mapping from cluster id to the ordered member words of that cluster.
///
/// This is the output of an external clustering step. A well-formed
/// assignment has an entry (possibly empty) for every id in `0..N`; that
/// invariant is checked when a cluster index is built, not here.
///
/// Serializes as a JSON object keyed by the numeric id:
/// `{"0": ["good", "great"], "1": ["bad"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterAssignment {
    clusters: BTreeMap<ClusterId, Vec<String>>,
}

impl ClusterAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assignment from per-word clustering labels.
    ///
    /// `labels[i]` is the cluster of `words[i]`. Every id in `0..n_clusters`
    /// receives an entry, empty when no word was labelled with it. Member
    /// order follows the order of `words`.
    pub fn from_labels<S: AsRef<str>>(
        n_clusters: usize,
        labels: &[usize],
        words: &[S],
    ) -> Result<Self, AssignmentError> {
        if labels.len() != words.len() {
            return Err(AssignmentError::LengthMismatch {
                labels: labels.len(),
                words: words.len(),
            });
        }

        let mut members: Vec<Vec<String>> = vec![Vec::new(); n_clusters];
        for (&label, word) in labels.iter().zip(words) {
            let slot = members
                .get_mut(label)
                .ok_or_else(|| AssignmentError::LabelOutOfRange {
                    label,
                    word: word.as_ref().to_string(),
                    n_clusters,
                })?;
            slot.push(word.as_ref().to_string());
        }

        Ok(members
            .into_iter()
            .enumerate()
            .map(|(id, words)| (ClusterId::new(id as u64), words))
            .collect())
    }

    /// Sets the members of a cluster, replacing any previous members.
    pub fn insert<I, S>(&mut self, id: ClusterId, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clusters
            .insert(id, words.into_iter().map(Into::into).collect());
    }

    /// Returns the members of a cluster.
    pub fn get(&self, id: ClusterId) -> Option<&[String]> {
        self.clusters.get(&id).map(Vec::as_slice)
    }

    /// Returns the cluster ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.clusters.keys().copied()
    }

    /// Iterates clusters in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, &[String])> {
        self.clusters.iter().map(|(id, words)| (*id, words.as_slice()))
    }

    /// Returns the number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Checks if the assignment has no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl FromIterator<(ClusterId, Vec<String>)> for ClusterAssignment {
    fn from_iter<T: IntoIterator<Item = (ClusterId, Vec<String>)>>(iter: T) -> Self {
        Self {
            clusters: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Vocabulary
// ============================================================================

/// Sorted set of distinct tokens that survived rare-word filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary words, sorting and deduplicating.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Checks whether a word is part of the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// Returns the position of a word in the sorted vocabulary.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    /// Iterates the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the words as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ============================================================================
// Feature Vectors
// ============================================================================

/// Output representation of feature vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// One entry per cluster, zeros included.
    #[default]
    Dense,
    /// Only non-zero entries with their column indices.
    Sparse,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(Representation::Dense),
            "sparse" => Ok(Representation::Sparse),
            other => Err(format!("unknown representation '{other}' (expected dense or sparse)")),
        }
    }
}

/// Sparse numeric vector with strictly ascending indices and no stored zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Logical length of the vector.
    pub len: usize,
    /// Column indices of the non-zero entries, ascending.
    pub indices: Vec<usize>,
    /// Values matching `indices`.
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Creates an all-zero sparse vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            len,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a sparse vector from a dense slice, dropping zeros.
    pub fn from_dense(dense: &[f64]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.0)
            .map(|(i, value)| (i, *value))
            .unzip();
        Self {
            len: dense.len(),
            indices,
            values,
        }
    }

    /// Returns the value at a column, zero when not stored.
    pub fn get(&self, index: usize) -> f64 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    /// Returns the number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Expands into a dense vector.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.len];
        for (&i, &value) in self.indices.iter().zip(&self.values) {
            dense[i] = value;
        }
        dense
    }
}

/// Per-document feature vector aligned to a fixed cluster-id feature space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureVector {
    Dense(Vec<f64>),
    Sparse(SparseVector),
}

impl FeatureVector {
    /// Returns the logical length (number of features).
    pub fn len(&self) -> usize {
        match self {
            FeatureVector::Dense(values) => values.len(),
            FeatureVector::Sparse(sparse) => sparse.len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value of a feature column.
    pub fn get(&self, index: usize) -> f64 {
        match self {
            FeatureVector::Dense(values) => values.get(index).copied().unwrap_or(0.0),
            FeatureVector::Sparse(sparse) => sparse.get(index),
        }
    }

    /// Returns the representation of this vector.
    pub fn representation(&self) -> Representation {
        match self {
            FeatureVector::Dense(_) => Representation::Dense,
            FeatureVector::Sparse(_) => Representation::Sparse,
        }
    }

    /// Returns the vector as a dense sequence.
    pub fn to_dense(&self) -> Vec<f64> {
        match self {
            FeatureVector::Dense(values) => values.clone(),
            FeatureVector::Sparse(sparse) => sparse.to_dense(),
        }
    }

    /// Checks whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            FeatureVector::Dense(values) => values.iter().all(|v| *v == 0.0),
            FeatureVector::Sparse(sparse) => sparse.values.iter().all(|v| *v == 0.0),
        }
    }

    /// Sum of all entries (total number of mapped tokens for count vectors).
    pub fn total(&self) -> f64 {
        match self {
            FeatureVector::Dense(values) => values.iter().sum(),
            FeatureVector::Sparse(sparse) => sparse.values.iter().sum(),
        }
    }
}

/// Stack of feature vectors, one row per input document, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    /// Column labels; column `i` of every row corresponds to `feature_names[i]`.
    pub feature_names: Vec<ClusterId>,
    /// One row per document.
    pub rows: Vec<FeatureVector>,
}

impl FeatureMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.feature_names.len()
    }

    /// Returns a row by position.
    pub fn row(&self, index: usize) -> Option<&FeatureVector> {
        self.rows.get(index)
    }

    /// Expands every row into a dense `Vec<f64>`.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(FeatureVector::to_dense).collect()
    }
}
