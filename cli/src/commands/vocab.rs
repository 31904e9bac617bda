//! VOCAB command - Build the filtered vocabulary of a corpus.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use concepts_engine::concepts_core::{Lemmatizer, Vocabulary};
use concepts_engine::{VectorizerConfig, build_vocabulary};
use serde::Serialize;
use std::path::PathBuf;

use super::{HumanReadable, Options, output, read_corpus};

/// Arguments for the vocab command.
#[derive(Args)]
pub struct VocabArgs {
    /// Corpus file, one document per line (`-` for stdin)
    pub corpus: PathBuf,

    /// Drop tokens whose corpus frequency is at most this value
    /// (default: BOC_RARE_THRESHOLD or 1)
    #[arg(short, long)]
    pub threshold: Option<usize>,
}

/// Vocabulary built from a corpus.
#[derive(Debug, Serialize)]
pub struct VocabResponse {
    pub documents: usize,
    pub threshold: usize,
    pub size: usize,
    pub words: Vocabulary,
}

impl HumanReadable for VocabResponse {
    fn print_human(&self) {
        println!("{}", "Vocabulary".green().bold());
        println!("{}", "=".repeat(60));
        println!();
        println!("  {} {}", "Documents:".cyan(), self.documents);
        println!("  {} > {}", "Min Frequency:".cyan(), self.threshold);
        println!("  {} {}", "Words:".cyan(), self.size);
        println!();

        if self.words.is_empty() {
            println!("  {}", "(No words survived filtering)".dimmed());
            return;
        }

        for word in self.words.iter() {
            println!("  {}", word);
        }
    }
}

/// Execute the vocab command.
pub fn execute(options: &Options, args: VocabArgs) -> Result<()> {
    let config = VectorizerConfig::from_env()?;
    let threshold = args.threshold.unwrap_or(config.rare_threshold);

    let mut corpus = read_corpus(&args.corpus)?;
    if options.lemmatize {
        let lemmatizer = options.lemmatizer();
        corpus = corpus
            .iter()
            .map(|document| lemmatizer.lemmatize(document))
            .collect::<Result<Vec<_>, _>>()?;
    }

    let words = build_vocabulary(&corpus, threshold);
    let response = VocabResponse {
        documents: corpus.len(),
        threshold,
        size: words.len(),
        words,
    };

    output(&response, options.human)
}
