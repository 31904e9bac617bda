//! CLUSTERS command - Label each cluster with its centroid-nearest word.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use concepts_engine::{ClusterIndex, ClusterLabel, describe_clusters};
use serde::Serialize;
use std::path::PathBuf;

use super::{HumanReadable, Options, output, read_assignment, read_embeddings};

/// Arguments for the clusters command.
#[derive(Args)]
pub struct ClustersArgs {
    /// Cluster assignment JSON file (`{"0": ["word", ...], ...}`)
    #[arg(short, long)]
    pub clusters: PathBuf,

    /// Embeddings JSON file (`{"word": [0.1, ...], ...}`)
    #[arg(short, long)]
    pub embeddings: PathBuf,
}

/// Centroid labels for every non-empty cluster.
#[derive(Debug, Serialize)]
pub struct ClustersResponse {
    pub clusters: usize,
    pub labels: Vec<ClusterLabel>,
}

impl HumanReadable for ClustersResponse {
    fn print_human(&self) {
        println!("{}", "Concept Clusters".green().bold());
        println!("{}", "=".repeat(60));
        println!();
        println!(
            "  {} {} ({} labelled)",
            "Clusters:".cyan(),
            self.clusters,
            self.labels.len()
        );
        println!();

        for label in &self.labels {
            println!(
                "  {} {} {}",
                ">>".blue().bold(),
                label.cluster.to_string().bold(),
                label.label
            );
            println!("     {}", format!("{} words", label.size).dimmed());
        }
    }
}

/// Execute the clusters command.
pub fn execute(options: &Options, args: ClustersArgs) -> Result<()> {
    let assignment = read_assignment(&args.clusters)?;
    let embeddings = read_embeddings(&args.embeddings)?;

    let index = ClusterIndex::build(&assignment).context("invalid cluster assignment")?;
    let labels = describe_clusters(&embeddings, &index).context("cluster description failed")?;

    let response = ClustersResponse {
        clusters: index.len(),
        labels,
    };

    output(&response, options.human)
}
