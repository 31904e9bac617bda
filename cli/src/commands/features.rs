//! FEATURES command - Show the feature ordering of a cluster assignment.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use concepts_engine::ClusterIndex;
use concepts_engine::concepts_core::ClusterId;
use serde::Serialize;
use std::path::PathBuf;

use super::{HumanReadable, Options, output, read_assignment};

/// Arguments for the features command.
#[derive(Args)]
pub struct FeaturesArgs {
    /// Cluster assignment JSON file (`{"0": ["word", ...], ...}`)
    #[arg(short, long)]
    pub clusters: PathBuf,
}

/// Column layout of every vector produced from an assignment.
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub feature_names: Vec<ClusterId>,
    /// Member count per feature, parallel to `feature_names`.
    pub sizes: Vec<usize>,
    /// Distinct words mapped to a cluster.
    pub mapped_words: usize,
}

impl HumanReadable for FeaturesResponse {
    fn print_human(&self) {
        println!("{}", "Feature Space".green().bold());
        println!("{}", "=".repeat(60));
        println!();
        println!("  {} {}", "Clusters:".cyan(), self.feature_names.len());
        println!("  {} {}", "Mapped Words:".cyan(), self.mapped_words);
        println!();

        for (column, (id, size)) in self.feature_names.iter().zip(&self.sizes).enumerate() {
            let size_text = format!("{size} words");
            println!("  {:>5}  {}  {}", column, id.to_string().bold(), size_text.dimmed());
        }
    }
}

/// Execute the features command.
pub fn execute(options: &Options, args: FeaturesArgs) -> Result<()> {
    let assignment = read_assignment(&args.clusters)?;
    let index = ClusterIndex::build(&assignment).context("invalid cluster assignment")?;

    let response = FeaturesResponse {
        feature_names: index.feature_space().to_vec(),
        sizes: index.clusters().map(|(_, words)| words.len()).collect(),
        mapped_words: index.vocabulary_size(),
    };

    output(&response, options.human)
}
