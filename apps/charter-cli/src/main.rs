//! Charter CLI Binary
//!
//! Runs the constitution scrape and the clause analysis utilities.

use anyhow::{Context, Result};
use charter_core::search::{print_similar_clause, print_top_terms, read_topic_vectors};
use charter_core::{CharterConfig, ClauseTable, Pipeline, TopicModel};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "charter")]
#[command(version, about = "Scrape constitutions into clause records and compare clauses")]
struct Args {
    /// TOML configuration for `scrape`; environment variables are used when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every catalog document and write the clause table as JSON Lines
    Scrape {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only process the first N catalog documents
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the top terms of each topic in a fitted model
    Topics {
        /// JSON file with `components` and `vocabulary`
        #[arg(short, long)]
        model: PathBuf,

        /// Terms per topic
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Print the clause from another document most similar to a given row
    Similar {
        /// Clause table written by `scrape`
        #[arg(long)]
        table: PathBuf,

        /// JSON array of per-row topic vectors
        #[arg(long)]
        vectors: PathBuf,

        /// Query row index
        #[arg(short, long)]
        index: usize,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<CharterConfig> {
    match path {
        Some(path) => CharterConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display())),
        None => CharterConfig::from_env().context("Invalid CHARTER_* environment"),
    }
}

fn scrape(config: CharterConfig, output: Option<PathBuf>, limit: Option<usize>) -> Result<()> {
    let mut pipeline = Pipeline::from_config(config)?;
    if let Some(limit) = limit {
        pipeline = pipeline.with_limit(limit);
    }

    let table = pipeline.run().context("Scrape failed")?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            table.write_jsonl(BufWriter::new(file))?;
            info!("Wrote {} clauses to {}", table.len(), path.display());
        }
        None => table.write_jsonl(io::stdout().lock())?,
    }

    Ok(())
}

fn topics(model: PathBuf, top: usize) -> Result<()> {
    let model = TopicModel::from_file(&model)
        .with_context(|| format!("Failed to load topic model: {}", model.display()))?;
    print_top_terms(&model.components, &model.vocabulary, top)?;
    Ok(())
}

fn similar(table: PathBuf, vectors: PathBuf, index: usize) -> Result<()> {
    let file = File::open(&table)
        .with_context(|| format!("Failed to open clause table: {}", table.display()))?;
    let table = ClauseTable::read_jsonl(BufReader::new(file))?;

    let file = File::open(&vectors)
        .with_context(|| format!("Failed to open topic vectors: {}", vectors.display()))?;
    let vectors = read_topic_vectors(BufReader::new(file))?;

    let found = print_similar_clause(&table, &vectors, index)?;
    info!("Best match is row {} (similarity {:.4})", found.index, found.similarity);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries data
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match args.command {
        Command::Scrape { output, limit } => {
            let config = load_config(args.config.as_ref())?;
            scrape(config, output, limit)
        }
        Command::Topics { model, top } => topics(model, top),
        Command::Similar {
            table,
            vectors,
            index,
        } => similar(table, vectors, index),
    }
}
