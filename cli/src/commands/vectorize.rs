//! VECTORIZE command - Turn a corpus into a Bag of Concepts feature matrix.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use concepts_engine::concepts_core::{FeatureMatrix, Representation};
use concepts_engine::{DocumentVectorizer, VectorizerConfig};
use serde::Serialize;
use std::path::PathBuf;

use super::{HumanReadable, Options, output, read_assignment, read_corpus};

/// Arguments for the vectorize command.
#[derive(Args)]
pub struct VectorizeArgs {
    /// Corpus file, one document per line (`-` for stdin)
    pub corpus: PathBuf,

    /// Cluster assignment JSON file (`{"0": ["word", ...], ...}`)
    #[arg(short, long)]
    pub clusters: PathBuf,

    /// Output representation: dense or sparse (default: BOC_REPRESENTATION or dense)
    #[arg(short, long)]
    pub representation: Option<Representation>,

    /// Vectorize documents one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

/// Feature matrix for a corpus.
#[derive(Debug, Serialize)]
pub struct VectorizeResponse {
    pub documents: usize,
    pub representation: Representation,
    #[serde(flatten)]
    pub matrix: FeatureMatrix,
}

impl HumanReadable for VectorizeResponse {
    fn print_human(&self) {
        println!("{}", "Bag of Concepts".green().bold());
        println!("{}", "=".repeat(60));
        println!();
        println!("  {} {}", "Documents:".cyan(), self.documents);
        println!("  {} {}", "Clusters:".cyan(), self.matrix.n_columns());
        println!("  {} {}", "Representation:".cyan(), self.representation);
        println!();

        for (row, vector) in self.matrix.rows.iter().enumerate() {
            let concepts: Vec<String> = self
                .matrix
                .feature_names
                .iter()
                .enumerate()
                .filter_map(|(column, id)| {
                    let count = vector.get(column);
                    (count != 0.0).then(|| format!("{id}={count}"))
                })
                .collect();

            if concepts.is_empty() {
                println!("  {} {}", format!("#{row}").yellow(), "(no concepts)".dimmed());
            } else {
                println!("  {} {}", format!("#{row}").yellow(), concepts.join(" "));
            }
        }
    }
}

/// Execute the vectorize command.
pub fn execute(options: &Options, args: VectorizeArgs) -> Result<()> {
    let mut config = VectorizerConfig::from_env()?;
    if let Some(representation) = args.representation {
        config.representation = representation;
    }
    if args.sequential {
        config.parallel = false;
    }

    let corpus = read_corpus(&args.corpus)?;
    let assignment = read_assignment(&args.clusters)?;

    let vectorizer = DocumentVectorizer::with_config(options.lemmatizer(), config);
    let matrix = vectorizer
        .vectorize_corpus(&corpus, &assignment)
        .context("vectorization failed")?;

    let response = VectorizeResponse {
        documents: corpus.len(),
        representation: config.representation,
        matrix,
    };

    output(&response, options.human)
}
