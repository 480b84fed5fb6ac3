//! Summit RAG
//!
//! Retrieval-augmented coaching answers over a mountaineering knowledge base:
//! - Ingestion of training logs, blog posts, expedition updates and stories
//! - Hybrid semantic and keyword search over an in-memory store
//! - Grounded answers from any OpenAI-compatible chat model

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use config::IngestionSettings;
use domain::{DocumentSource, KnowledgeStore};
use infrastructure::{
    embedding::EmbeddingProviderFactory,
    ingestion::{ContentRepositorySource, FrontMatterDirectory, IngestionPipeline, JsonContentRepository},
    knowledge_base::{BaselineSource, InMemoryKnowledgeStore},
    llm::LlmProviderFactory,
    services::{KnowledgeService, RagService, SearchService},
};
use tracing::info;

/// Sources the configured ingestion run reads from, in ingestion order
pub fn build_sources(settings: &IngestionSettings) -> Vec<Arc<dyn DocumentSource>> {
    let mut sources: Vec<Arc<dyn DocumentSource>> = Vec::new();

    if settings.seed_baseline {
        sources.push(Arc::new(BaselineSource::new()));
    }

    if let Some(ref records_file) = settings.records_file {
        let repository = Arc::new(JsonContentRepository::new(records_file));
        sources.extend(ContentRepositorySource::all(repository));
    }

    if let Some(ref content_dir) = settings.content_dir {
        sources.push(Arc::new(FrontMatterDirectory::new(content_dir)));
    }

    sources
}

/// Wire providers, store, pipeline and services from configuration
pub fn create_knowledge_service(config: &AppConfig) -> anyhow::Result<KnowledgeService> {
    let embedder = EmbeddingProviderFactory::create(&config.embedding)?;
    let generator = LlmProviderFactory::create(&config.generator)?;

    info!(
        embedding = embedder.provider_name(),
        embedding_model = embedder.model(),
        generator = generator.provider_name(),
        "Creating knowledge service"
    );

    let store: Arc<dyn KnowledgeStore> = Arc::new(InMemoryKnowledgeStore::new(embedder));
    let pipeline =
        IngestionPipeline::new(Arc::clone(&store)).with_sources(build_sources(&config.ingestion));

    let search = Arc::new(SearchService::new(store).with_bootstrap(pipeline));
    let rag = RagService::new(Arc::clone(&search), generator, config.generator.model.clone())
        .with_config(config.retrieval.clone());

    Ok(KnowledgeService::new(search, rag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn offline_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ingestion.content_dir = None;
        config
    }

    #[test]
    fn test_build_sources() {
        let settings = IngestionSettings {
            content_dir: Some("content/blog".into()),
            records_file: Some("export.json".into()),
            seed_baseline: true,
        };

        let names: Vec<String> = build_sources(&settings)
            .iter()
            .map(|source| source.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "baseline",
                "training entries",
                "blog posts",
                "expedition updates",
                "personal stories",
                "blog files"
            ]
        );
    }

    #[test]
    fn test_no_sources() {
        let settings = IngestionSettings {
            content_dir: None,
            records_file: None,
            seed_baseline: false,
        };

        assert!(build_sources(&settings).is_empty());
    }

    #[tokio::test]
    async fn test_default_service_seeds_baseline() {
        let service = create_knowledge_service(&offline_config()).unwrap();

        let summary = service.ingest().await;

        assert!(summary.success);
        assert_eq!(summary.documents_added, 5);
        assert_eq!(service.stats().await.total_documents, 5);
    }

    #[tokio::test]
    async fn test_service_reads_records_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"expeditionUpdates": [
                {"_id": "e1", "title": "Camp 2", "content": "Winds eased overnight.",
                 "conditions": "Clear, -20C", "lessons": "Start earlier"}
            ]}"#,
        )
        .unwrap();

        let mut config = offline_config();
        config.ingestion.records_file = Some(file.path().to_path_buf());
        let service = create_knowledge_service(&config).unwrap();

        let summary = service.ingest().await;

        assert!(summary.success);
        assert_eq!(summary.documents_added, 6);
        assert_eq!(summary.categories["Expedition Experience"], 1);
    }

    #[tokio::test]
    async fn test_missing_records_file_is_reported() {
        let mut config = offline_config();
        config.ingestion.records_file = Some("/nonexistent/export.json".into());
        let service = create_knowledge_service(&config).unwrap();

        let summary = service.ingest().await;

        assert!(!summary.success);
        assert_eq!(summary.documents_added, 5);
        assert_eq!(summary.errors.len(), 4);
    }
}
