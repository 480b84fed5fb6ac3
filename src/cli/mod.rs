//! CLI module for Summit RAG
//!
//! Every command builds a fresh in-memory store, ingests into it and then:
//! - `ingest`: prints the ingestion summary
//! - `ask`: answers a question from the knowledge base
//! - `stats`: prints document counts
//! - `export`: prints stored document summaries

pub mod ask;
pub mod export;
pub mod ingest;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use config::ConfigError;
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Summit RAG - mountaineering coaching answers grounded in your own content
#[derive(Parser)]
#[command(name = "summit-rag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest all configured sources and print the summary
    Ingest(ingest::IngestArgs),

    /// Ask a question
    Ask(ask::AskArgs),

    /// Print knowledge base statistics
    Stats(SourceArgs),

    /// Print stored document summaries as JSON
    Export(SourceArgs),
}

/// Source overrides shared by every command
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Directory of Markdown files with front matter (overrides config)
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// JSON content export (overrides config)
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Skip the baseline coaching documents
    #[arg(long)]
    pub no_baseline: bool,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(ref dir) = self.content_dir {
            config.ingestion.content_dir = Some(dir.clone());
        }
        if let Some(ref records) = self.records {
            config.ingestion.records_file = Some(records.clone());
        }
        if self.no_baseline {
            config.ingestion.seed_baseline = false;
        }
    }
}

/// Load `.env` and layered configuration, apply overrides, start logging
pub fn load_config(sources: &SourceArgs) -> AppConfig {
    dotenvy::dotenv().ok();

    let (mut config, load_error) = config_or_default(AppConfig::load());
    sources.apply(&mut config);
    logging::init_logging(&config.logging);

    // No subscriber exists before init_logging
    if let Some(e) = load_error {
        warn!(error = %e, "Invalid configuration, falling back to defaults");
    }

    config
}

fn config_or_default(
    loaded: Result<AppConfig, ConfigError>,
) -> (AppConfig, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
