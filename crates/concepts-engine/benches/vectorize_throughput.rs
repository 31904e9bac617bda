//! Vectorization Throughput Benchmark
//!
//! Measures Bag of Concepts corpus vectorization at various corpus sizes.
//!
//! This benchmark tests:
//! - Sequential vs parallel corpus vectorization
//! - Dense vs sparse output formatting
//! - Cluster index construction for large assignments

use concepts_engine::concepts_core::{ClusterAssignment, ClusterId, Representation};
use concepts_engine::{ClusterIndex, DocumentVectorizer, IdentityLemmatizer, VectorizerConfig};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

/// Number of concept clusters in the synthetic assignment.
const N_CLUSTERS: usize = 150;

/// Words per cluster in the synthetic assignment.
const WORDS_PER_CLUSTER: usize = 40;

/// Tokens per synthetic document.
const DOCUMENT_LENGTH: usize = 60;

fn synthetic_assignment() -> ClusterAssignment {
    let words: Vec<String> = (0..N_CLUSTERS * WORDS_PER_CLUSTER)
        .map(|i| format!("word{i}"))
        .collect();
    let labels: Vec<usize> = (0..words.len()).map(|i| i % N_CLUSTERS).collect();
    ClusterAssignment::from_labels(N_CLUSTERS, &labels, &words).expect("labels in range")
}

/// Generates documents mixing mapped words with out-of-vocabulary noise.
fn synthetic_corpus(rng: &mut impl Rng, documents: usize) -> Vec<String> {
    let vocabulary = N_CLUSTERS * WORDS_PER_CLUSTER;
    (0..documents)
        .map(|_| {
            (0..DOCUMENT_LENGTH)
                .map(|_| {
                    if rng.gen_bool(0.7) {
                        format!("word{}", rng.gen_range(0..vocabulary))
                    } else {
                        format!("noise{}", rng.gen_range(0..1000))
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_corpus_vectorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize_corpus");
    let assignment = synthetic_assignment();
    let index = ClusterIndex::build(&assignment).expect("valid assignment");
    let mut rng = rand::thread_rng();

    for &size in &[100usize, 1_000, 10_000] {
        let corpus = synthetic_corpus(&mut rng, size);
        group.throughput(Throughput::Elements(size as u64));

        for (label, parallel) in [("sequential", false), ("parallel", true)] {
            let vectorizer = DocumentVectorizer::with_config(
                IdentityLemmatizer,
                VectorizerConfig::default().with_parallel(parallel),
            );
            group.bench_with_input(BenchmarkId::new(label, size), &corpus, |b, corpus| {
                b.iter(|| {
                    vectorizer
                        .vectorize_corpus_with_index(black_box(corpus), &index)
                        .expect("vectorization succeeds")
                })
            });
        }
    }

    group.finish();
}

fn bench_representation(c: &mut Criterion) {
    let mut group = c.benchmark_group("representation");
    let assignment = synthetic_assignment();
    let index = ClusterIndex::build(&assignment).expect("valid assignment");
    let corpus = synthetic_corpus(&mut rand::thread_rng(), 1_000);

    for representation in [Representation::Dense, Representation::Sparse] {
        let vectorizer = DocumentVectorizer::with_config(
            IdentityLemmatizer,
            VectorizerConfig::default().with_representation(representation),
        );
        group.bench_function(representation.to_string(), |b| {
            b.iter(|| {
                vectorizer
                    .vectorize_corpus_with_index(black_box(&corpus), &index)
                    .expect("vectorization succeeds")
            })
        });
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let assignment = synthetic_assignment();
    c.bench_function("cluster_index_build", |b| {
        b.iter(|| ClusterIndex::build(black_box(&assignment)).expect("valid assignment"))
    });
}

criterion_group!(
    benches,
    bench_corpus_vectorization,
    bench_representation,
    bench_index_build
);
criterion_main!(benches);
