//! Cluster index: the inverse `word -> cluster` lookup plus the fixed
//! feature-space ordering.
//!
//! The index is derived from a [`ClusterAssignment`] and is read-only once
//! built. Its feature space (the ascending list of cluster ids) defines the
//! column order of every feature vector produced against that assignment.
//! The ordering is a pure function of the assignment, so two indexes built
//! from the same assignment always agree.
//!
//! ## Duplicate membership
//!
//! A word listed in several clusters resolves to the cluster with the highest
//! id: clusters are processed in ascending order and later ids overwrite
//! earlier ones. Each overwrite is reported at debug level.

use crate::error::{ConceptError, ConceptResult};
use concepts_core::{ClusterAssignment, ClusterId};
use std::collections::HashMap;

/// Read-only lookup structure built from a cluster assignment.
#[derive(Debug, Clone)]
pub struct ClusterIndex {
    /// Word to cluster mapping, last cluster wins.
    word_to_cluster: HashMap<String, ClusterId>,

    /// Ascending cluster ids; column `i` is `feature_space[i]`.
    feature_space: Vec<ClusterId>,

    /// Member words per cluster, indexed by column.
    members: Vec<Vec<String>>,
}

impl ClusterIndex {
    /// Builds the index from an assignment.
    ///
    /// # Errors
    ///
    /// - [`ConceptError::EmptyAssignment`] when there are no clusters
    /// - [`ConceptError::NonContiguousClusters`] when ids are not exactly `0..N`
    pub fn build(assignment: &ClusterAssignment) -> ConceptResult<Self> {
        let feature_space = feature_space(assignment)?;

        let mut word_to_cluster = HashMap::new();
        let mut members = Vec::with_capacity(feature_space.len());

        for (id, words) in assignment.iter() {
            for word in words {
                if let Some(previous) = word_to_cluster.insert(word.clone(), id) {
                    if previous != id {
                        tracing::debug!(
                            word = %word,
                            previous = %previous,
                            cluster = %id,
                            "word listed in multiple clusters, keeping the later one"
                        );
                    }
                }
            }
            members.push(words.to_vec());
        }

        tracing::debug!(
            clusters = feature_space.len(),
            words = word_to_cluster.len(),
            "built cluster index"
        );

        Ok(Self {
            word_to_cluster,
            feature_space,
            members,
        })
    }

    /// Returns the cluster of a word, or `None` when the word is unmapped.
    pub fn cluster_of(&self, word: &str) -> Option<ClusterId> {
        self.word_to_cluster.get(word).copied()
    }

    /// Returns the ordered feature space (ascending cluster ids).
    pub fn feature_space(&self) -> &[ClusterId] {
        &self.feature_space
    }

    /// Returns the column of a cluster in feature vectors.
    pub fn column_of(&self, id: ClusterId) -> Option<usize> {
        let column = usize::try_from(id.value()).ok()?;
        (column < self.feature_space.len()).then_some(column)
    }

    /// Returns the member words of a cluster, in assignment order.
    pub fn members(&self, id: ClusterId) -> Option<&[String]> {
        self.column_of(id)
            .map(|column| self.members[column].as_slice())
    }

    /// Iterates clusters with their members in ascending id order.
    pub fn clusters(&self) -> impl Iterator<Item = (ClusterId, &[String])> {
        self.feature_space
            .iter()
            .copied()
            .zip(self.members.iter().map(Vec::as_slice))
    }

    /// Number of clusters (width of every feature vector).
    pub fn len(&self) -> usize {
        self.feature_space.len()
    }

    /// Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.feature_space.is_empty()
    }

    /// Number of distinct mapped words.
    pub fn vocabulary_size(&self) -> usize {
        self.word_to_cluster.len()
    }
}

/// Returns the ascending cluster ids of an assignment, validating that they
/// are exactly `0..N` with `N >= 1`.
pub fn feature_space(assignment: &ClusterAssignment) -> ConceptResult<Vec<ClusterId>> {
    if assignment.is_empty() {
        return Err(ConceptError::EmptyAssignment);
    }

    let ids: Vec<ClusterId> = assignment.ids().collect();
    for (position, id) in ids.iter().enumerate() {
        let expected = ClusterId::new(position as u64);
        if *id != expected {
            return Err(ConceptError::NonContiguousClusters {
                expected,
                found: *id,
            });
        }
    }

    Ok(ids)
}
