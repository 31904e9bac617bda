//! Bag of Concepts document vectorization.
//!
//! Each document goes through the same stateless pipeline:
//!
//! 1. Lemmatize with the configured [`Lemmatizer`] and split on whitespace
//! 2. Map every token to its cluster; unmapped tokens are dropped
//! 3. Count occurrences per cluster into a document-local [`ConceptCounts`]
//! 4. Project the counts onto the index's feature space (zeros for absent ids)
//! 5. Format the projection as a dense or sparse [`FeatureVector`]
//!
//! Counting and projection do not depend on the output representation; the
//! dense/sparse choice is applied only in the last step.
//!
//! Corpus vectorization builds the [`ClusterIndex`] once, shares it read-only,
//! and runs the per-document pipeline independently for every document
//! (optionally on the rayon thread pool). Row `i` of the matrix is always
//! identical to vectorizing document `i` alone, and the call either returns
//! every row or fails with the first collaborator error.

use crate::config::VectorizerConfig;
use crate::error::ConceptResult;
use crate::index::{self, ClusterIndex};
use concepts_core::{
    ClusterAssignment, ClusterId, FeatureMatrix, FeatureVector, Lemmatizer, Representation,
    SparseVector,
};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Per-document cluster occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptCounts {
    counts: BTreeMap<ClusterId, u32>,
}

impl ConceptCounts {
    /// Counts mapped tokens against an index, skipping unmapped ones.
    pub fn from_tokens<'a, I>(tokens: I, index: &ClusterIndex) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| index.cluster_of(token))
            .collect()
    }

    /// Returns the count of a cluster (0 when absent).
    pub fn get(&self, id: ClusterId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Iterates non-zero counts in ascending cluster order.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, u32)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }

    /// Total number of mapped tokens.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Projects the counts onto a feature space.
    ///
    /// Returns `(column, count)` pairs in ascending column order, one per
    /// non-zero cluster present in `feature_space`.
    pub fn project(&self, feature_space: &[ClusterId]) -> Vec<(usize, f64)> {
        feature_space
            .iter()
            .enumerate()
            .filter_map(|(column, id)| {
                self.counts
                    .get(id)
                    .map(|&count| (column, f64::from(count)))
            })
            .collect()
    }

    /// Projects and formats the counts as a feature vector.
    pub fn to_feature_vector(
        &self,
        feature_space: &[ClusterId],
        representation: Representation,
    ) -> FeatureVector {
        format_projection(self.project(feature_space), feature_space.len(), representation)
    }
}

impl FromIterator<ClusterId> for ConceptCounts {
    fn from_iter<T: IntoIterator<Item = ClusterId>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for id in iter {
            *counts.entry(id).or_insert(0) += 1;
        }
        Self { counts }
    }
}

/// Formats sparse `(column, value)` pairs into the requested representation.
fn format_projection(
    entries: Vec<(usize, f64)>,
    len: usize,
    representation: Representation,
) -> FeatureVector {
    match representation {
        Representation::Dense => {
            let mut dense = vec![0.0; len];
            for (column, value) in entries {
                dense[column] = value;
            }
            FeatureVector::Dense(dense)
        }
        Representation::Sparse => {
            let (indices, values) = entries.into_iter().unzip();
            FeatureVector::Sparse(SparseVector {
                len,
                indices,
                values,
            })
        }
    }
}

/// Converts documents into Bag of Concepts feature vectors.
///
/// # Example
///
/// ```rust,ignore
/// use concepts_engine::{DocumentVectorizer, IdentityLemmatizer};
///
/// let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
/// let vector = vectorizer.vectorize_document("good great bad good", &assignment)?;
/// assert_eq!(vector.to_dense(), vec![3.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentVectorizer<L> {
    lemmatizer: L,
    config: VectorizerConfig,
}

impl<L: Lemmatizer> DocumentVectorizer<L> {
    /// Creates a vectorizer with the default configuration.
    pub fn new(lemmatizer: L) -> Self {
        Self::with_config(lemmatizer, VectorizerConfig::default())
    }

    /// Creates a vectorizer with a custom configuration.
    pub fn with_config(lemmatizer: L, config: VectorizerConfig) -> Self {
        Self { lemmatizer, config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Counts the concepts of one document against an index.
    pub fn concept_counts(&self, text: &str, index: &ClusterIndex) -> ConceptResult<ConceptCounts> {
        let lemmatized = self.lemmatizer.lemmatize(text)?;
        Ok(ConceptCounts::from_tokens(
            lemmatized.split_whitespace(),
            index,
        ))
    }

    /// Vectorizes a single document.
    ///
    /// The cluster index is rebuilt from `assignment` on every call.
    pub fn vectorize_document(
        &self,
        text: &str,
        assignment: &ClusterAssignment,
    ) -> ConceptResult<FeatureVector> {
        let index = ClusterIndex::build(assignment)?;
        self.vectorize_document_with_index(text, &index)
    }

    /// Vectorizes a single document against a prebuilt index.
    pub fn vectorize_document_with_index(
        &self,
        text: &str,
        index: &ClusterIndex,
    ) -> ConceptResult<FeatureVector> {
        let counts = self.concept_counts(text, index)?;
        Ok(counts.to_feature_vector(index.feature_space(), self.config.representation))
    }

    /// Vectorizes every document of a corpus, one row per document in input
    /// order.
    pub fn vectorize_corpus<S>(
        &self,
        documents: &[S],
        assignment: &ClusterAssignment,
    ) -> ConceptResult<FeatureMatrix>
    where
        S: AsRef<str> + Sync,
    {
        let index = ClusterIndex::build(assignment)?;
        self.vectorize_corpus_with_index(documents, &index)
    }

    /// Vectorizes a corpus against a prebuilt index.
    pub fn vectorize_corpus_with_index<S>(
        &self,
        documents: &[S],
        index: &ClusterIndex,
    ) -> ConceptResult<FeatureMatrix>
    where
        S: AsRef<str> + Sync,
    {
        let vectorize = |document: &S| self.vectorize_document_with_index(document.as_ref(), index);

        let rows = if self.config.parallel {
            documents.par_iter().map(vectorize).collect::<ConceptResult<Vec<_>>>()
        } else {
            documents.iter().map(vectorize).collect::<ConceptResult<Vec<_>>>()
        };

        let rows = rows.inspect_err(|e| {
            tracing::warn!(error = %e, documents = documents.len(), "corpus vectorization failed");
        })?;

        tracing::info!(
            documents = rows.len(),
            clusters = index.len(),
            representation = %self.config.representation,
            parallel = self.config.parallel,
            "vectorized corpus"
        );

        Ok(FeatureMatrix {
            feature_names: index.feature_space().to_vec(),
            rows,
        })
    }
}

/// Returns the column labels of every vector produced from `assignment`.
///
/// Identical to the assignment's feature space: column `i` of any feature
/// vector corresponds to `feature_names(assignment)?[i]`.
pub fn feature_names(assignment: &ClusterAssignment) -> ConceptResult<Vec<ClusterId>> {
    index::feature_space(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConceptError;
    use crate::lemmatize::IdentityLemmatizer;
    use concepts_core::CollaboratorError;

    fn sentiment() -> ClusterAssignment {
        let mut assignment = ClusterAssignment::new();
        assignment.insert(ClusterId::new(0), ["good", "great"]);
        assignment.insert(ClusterId::new(1), ["bad"]);
        assignment
    }

    struct FailingLemmatizer;

    impl Lemmatizer for FailingLemmatizer {
        fn lemmatize(&self, text: &str) -> Result<String, CollaboratorError> {
            if text.contains("boom") {
                Err(CollaboratorError::new("lemmatizer", "backend unreachable"))
            } else {
                Ok(text.to_string())
            }
        }
    }

    #[test]
    fn counts_per_cluster() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let vector = vectorizer
            .vectorize_document("good great bad good", &sentiment())
            .unwrap();

        assert_eq!(vector.to_dense(), vec![3.0, 1.0]);
    }

    #[test]
    fn unmapped_tokens_are_ignored() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let vector = vectorizer
            .vectorize_document("good movie honestly bad", &sentiment())
            .unwrap();

        assert_eq!(vector.to_dense(), vec![1.0, 1.0]);
    }

    #[test]
    fn no_match_gives_zero_vector() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let vector = vectorizer
            .vectorize_document("nothing here matches", &sentiment())
            .unwrap();

        assert_eq!(vector.len(), 2);
        assert!(vector.is_zero());
    }

    #[test]
    fn empty_document_gives_zero_vector() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let vector = vectorizer.vectorize_document("", &sentiment()).unwrap();

        assert_eq!(vector.to_dense(), vec![0.0, 0.0]);
    }

    #[test]
    fn sparse_representation() {
        let config = VectorizerConfig::default().with_representation(Representation::Sparse);
        let vectorizer = DocumentVectorizer::with_config(IdentityLemmatizer, config);
        let vector = vectorizer.vectorize_document("bad bad", &sentiment()).unwrap();

        match &vector {
            FeatureVector::Sparse(sparse) => {
                assert_eq!(sparse.len, 2);
                assert_eq!(sparse.indices, vec![1]);
                assert_eq!(sparse.values, vec![2.0]);
            }
            FeatureVector::Dense(_) => panic!("expected sparse vector"),
        }
    }

    #[test]
    fn corpus_rows_match_single_documents() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let docs = ["good great bad good", "bad bad unknown", ""];
        let matrix = vectorizer.vectorize_corpus(&docs, &sentiment()).unwrap();

        assert_eq!(matrix.n_rows(), 3);
        assert_eq!(matrix.feature_names, vec![ClusterId::new(0), ClusterId::new(1)]);
        for (i, doc) in docs.iter().enumerate() {
            let single = vectorizer.vectorize_document(doc, &sentiment()).unwrap();
            assert_eq!(matrix.rows[i], single);
        }
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let docs: Vec<String> = (0..64)
            .map(|i| match i % 3 {
                0 => "good good bad".to_string(),
                1 => "great".to_string(),
                _ => format!("noise{i} bad"),
            })
            .collect();

        let parallel = DocumentVectorizer::new(IdentityLemmatizer);
        let sequential = DocumentVectorizer::with_config(
            IdentityLemmatizer,
            VectorizerConfig::default().with_parallel(false),
        );

        assert_eq!(
            parallel.vectorize_corpus(&docs, &sentiment()).unwrap(),
            sequential.vectorize_corpus(&docs, &sentiment()).unwrap()
        );
    }

    #[test]
    fn collaborator_failure_fails_whole_corpus() {
        let vectorizer = DocumentVectorizer::new(FailingLemmatizer);
        let docs = ["good", "boom", "bad"];
        let err = vectorizer.vectorize_corpus(&docs, &sentiment()).unwrap_err();

        assert!(matches!(err, ConceptError::Collaborator(_)));
    }

    #[test]
    fn malformed_assignment_fails_fast() {
        let vectorizer = DocumentVectorizer::new(IdentityLemmatizer);
        let err = vectorizer
            .vectorize_document("good", &ClusterAssignment::new())
            .unwrap_err();

        assert_eq!(err, ConceptError::EmptyAssignment);
    }

    #[test]
    fn feature_names_match_columns() {
        let names = feature_names(&sentiment()).unwrap();
        assert_eq!(names, feature_names(&sentiment()).unwrap());
        assert_eq!(names, vec![ClusterId::new(0), ClusterId::new(1)]);
    }

    #[test]
    fn concept_counts_projection() {
        let index = ClusterIndex::build(&sentiment()).unwrap();
        let counts = ConceptCounts::from_tokens(["bad", "good", "x", "bad"], &index);

        assert_eq!(counts.get(ClusterId::new(1)), 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.project(index.feature_space()), vec![(0, 1.0), (1, 2.0)]);
    }
}
