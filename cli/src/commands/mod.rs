//! Command implementations for the boc CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod clusters;
pub mod features;
pub mod vectorize;
pub mod vocab;

use anyhow::{Context, Result};
use concepts_engine::concepts_core::{ClusterAssignment, Lemmatizer};
use concepts_engine::{EmbeddingTable, IdentityLemmatizer, NormalizingLemmatizer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Print human-readable output instead of JSON.
    pub human: bool,
    /// Normalize documents with the built-in lemmatizer.
    pub lemmatize: bool,
}

impl Options {
    /// Returns the lemmatizer selected by `--lemmatize`.
    pub fn lemmatizer(&self) -> Arc<dyn Lemmatizer> {
        if self.lemmatize {
            Arc::new(NormalizingLemmatizer::new())
        } else {
            Arc::new(IdentityLemmatizer)
        }
    }
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Opens a path for reading; `-` means stdin.
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdin()))
    } else {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Box::new(file))
    }
}

/// Reads a corpus with one document per line.
pub fn read_corpus(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open_input(path)?);
    let documents = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read corpus {}", path.display()))?;

    tracing::debug!(documents = documents.len(), path = %path.display(), "read corpus");
    Ok(documents)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let reader = BufReader::new(open_input(path)?);
    serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {what} from {}", path.display()))
}

/// Reads a cluster assignment JSON object (`{"0": ["word", ...], ...}`).
pub fn read_assignment(path: &Path) -> Result<ClusterAssignment> {
    read_json(path, "cluster assignment")
}

/// Reads an embedding table JSON object (`{"word": [0.1, ...], ...}`).
pub fn read_embeddings(path: &Path) -> Result<EmbeddingTable> {
    read_json(path, "embeddings")
}
