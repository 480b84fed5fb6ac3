//! Ingest command - runs every configured source once

use clap::Args;
use tracing::info;

use super::{load_config, SourceArgs};

/// Arguments for the ingest command
#[derive(Args, Clone, Debug)]
pub struct IngestArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Exit with an error when any record failed
    #[arg(long)]
    pub strict: bool,
}

/// Run ingestion and print the summary as JSON
pub async fn run(args: IngestArgs) -> anyhow::Result<()> {
    let config = load_config(&args.sources);
    let service = crate::create_knowledge_service(&config)?;

    let summary = service.ingest().await;
    info!(
        added = summary.documents_added,
        failed = summary.failed(),
        "Ingestion complete"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if args.strict && !summary.success {
        anyhow::bail!("{} ingestion error(s)", summary.errors.len());
    }

    Ok(())
}
