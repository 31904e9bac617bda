//! Command-line interface for Bag of Concepts vectorization.
//!
//! This CLI tool provides commands for every pipeline stage:
//! - vocab: Build the rare-word-filtered vocabulary of a corpus
//! - vectorize: Turn a corpus into a Bag of Concepts feature matrix
//! - features: Show the feature (column) ordering of a cluster assignment
//! - clusters: Label each cluster with its centroid-nearest word
//!
//! Corpora are plain text files with one document per line (`-` reads stdin).
//! Cluster assignments and embeddings are JSON objects.
//!
//! Configuration via environment:
//! - BOC_REPRESENTATION: dense or sparse output (default: dense)
//! - BOC_PARALLEL: vectorize documents in parallel (default: true)
//! - BOC_RARE_THRESHOLD: rare-word threshold for vocab (default: 1)
//! - BOC_LOG_LEVEL: log level when RUST_LOG is unset (default: warn)

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    Options, clusters::ClustersArgs, features::FeaturesArgs, vectorize::VectorizeArgs,
    vocab::VocabArgs,
};

/// Bag of Concepts CLI
///
/// Convert documents into concept-cluster count vectors. Output is JSON by
/// default; use --human for formatted output.
#[derive(Parser)]
#[command(name = "boc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Normalize documents with the built-in English lemmatizer
    /// (otherwise documents are taken as already lemmatized)
    #[arg(long, global = true)]
    lemmatize: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "BOC_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the vocabulary of a corpus
    Vocab(VocabArgs),

    /// Vectorize a corpus into a feature matrix
    Vectorize(VectorizeArgs),

    /// Show the feature ordering of a cluster assignment
    Features(FeaturesArgs),

    /// Label clusters with their centroid-nearest word
    Clusters(ClustersArgs),
}

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let options = Options {
        human: cli.human,
        lemmatize: cli.lemmatize,
    };

    let result = match cli.command {
        Commands::Vocab(args) => commands::vocab::execute(&options, args),
        Commands::Vectorize(args) => commands::vectorize::execute(&options, args),
        Commands::Features(args) => commands::features::execute(&options, args),
        Commands::Clusters(args) => commands::clusters::execute(&options, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber, logging to stderr so stdout stays
/// machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
