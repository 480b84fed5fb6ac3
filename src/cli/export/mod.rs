//! Export command - stored document summaries after ingestion

use super::{load_config, SourceArgs};

pub async fn run(args: SourceArgs) -> anyhow::Result<()> {
    let config = load_config(&args);
    let service = crate::create_knowledge_service(&config)?;

    service.ingest().await;
    let documents = service.export().await;

    println!("{}", serde_json::to_string_pretty(&documents)?);
    Ok(())
}
