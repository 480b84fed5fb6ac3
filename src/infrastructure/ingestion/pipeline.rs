//! Ingestion pipeline: every record of every source into the knowledge store

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::ingestion::{
    DocumentSource, IngestedRecord, IngestionFailure, IngestionSummary, RecordOutcome,
    SourceRecord,
};
use crate::domain::knowledge_base::KnowledgeStore;

/// Loads all sources concurrently, then adds their records one at a time in
/// source order so that store order is reproducible.
#[derive(Debug)]
pub struct IngestionPipeline {
    store: Arc<dyn KnowledgeStore>,
    sources: Vec<Arc<dyn DocumentSource>>,
}

impl IngestionPipeline {
    pub fn new(store: Arc<dyn KnowledgeStore>) -> Self {
        Self {
            store,
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Arc<dyn DocumentSource>>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Run every source. Never fails as a whole: problems end up in the summary.
    pub async fn run(&self) -> IngestionSummary {
        let loads = join_all(self.sources.iter().map(|source| async move {
            (source.name(), source.load().await)
        }))
        .await;

        let mut summary = IngestionSummary::new();

        for (name, loaded) in loads {
            let records = match loaded {
                Ok(records) => records,
                Err(e) => {
                    warn!(source = name, error = %e, "Source failed to load");
                    summary.record_source_failure(name, e);
                    continue;
                }
            };

            let mut source_summary = IngestionSummary::new();
            for record in records {
                let outcome = self.ingest_record(record).await;
                if let Err(ref failure) = outcome {
                    warn!(source = name, failure = %failure, "Record not ingested");
                }
                source_summary.record(outcome);
            }

            debug!(
                source = name,
                processed = source_summary.documents_processed,
                added = source_summary.documents_added,
                "Source ingested"
            );
            summary.merge(source_summary);
        }

        info!(
            processed = summary.documents_processed,
            added = summary.documents_added,
            errors = summary.errors.len(),
            "Ingestion finished"
        );

        summary
    }

    async fn ingest_record(&self, record: SourceRecord) -> RecordOutcome {
        let SourceRecord {
            kind,
            record_id,
            draft,
        } = record;

        let draft = match draft {
            Ok(draft) => draft,
            Err(e) => return Err(IngestionFailure::new(kind, record_id, e.to_string())),
        };

        let category = draft.category().to_string();

        match self.store.add_document(draft).await {
            Ok(document_id) => Ok(IngestedRecord {
                kind,
                record_id,
                document_id,
                category,
            }),
            Err(e) => Err(IngestionFailure::new(kind, record_id, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::domain::ingestion::{MockDocumentSource, PersonalStory, TrainingEntry};
    use crate::domain::knowledge_base::DocumentDraft;
    use crate::infrastructure::ingestion::{ContentRepositorySource, StaticContentRepository};
    use crate::infrastructure::knowledge_base::{BaselineSource, InMemoryKnowledgeStore};

    fn store(embedder: MockEmbeddingProvider) -> Arc<InMemoryKnowledgeStore> {
        Arc::new(InMemoryKnowledgeStore::new(Arc::new(embedder)))
    }

    fn draft(title: &str, content: &str, category: &str) -> DocumentDraft {
        DocumentDraft::new(title, content, category, "Test").unwrap()
    }

    #[tokio::test]
    async fn test_training_entries_by_intensity() {
        let store = store(MockEmbeddingProvider::new("test", 8));
        let entry = |id: &str, intensity: &str| TrainingEntry {
            id: id.to_string(),
            title: format!("Session {}", id),
            description: Some(format!("{} effort on the hill", intensity)),
            training_type: Some("hiking".to_string()),
            intensity: Some(intensity.to_string()),
            ..Default::default()
        };
        let repository = Arc::new(
            StaticContentRepository::default()
                .with_training_entry(entry("t1", "low"))
                .with_training_entry(entry("t2", "moderate"))
                .with_training_entry(entry("t3", "high")),
        );

        let summary = IngestionPipeline::new(store.clone())
            .with_sources(ContentRepositorySource::all(repository))
            .run()
            .await;

        assert!(summary.success);
        assert_eq!(summary.documents_processed, 3);
        assert_eq!(summary.documents_added, 3);
        assert_eq!(summary.categories["Training Log"], 3);

        let stats = store.stats().await;
        assert_eq!(stats.total_documents, 3);
        assert_eq!(stats.difficulty_levels.len(), 3);
        assert!(stats.difficulty_levels.values().all(|count| *count == 1));
    }

    #[tokio::test]
    async fn test_partial_failures_are_recorded() {
        let store = store(MockEmbeddingProvider::new("test", 8).failing_on("embedding breaks here"));
        let repository = Arc::new(
            StaticContentRepository::default()
                .with_personal_story(PersonalStory {
                    id: "p1".to_string(),
                    title: "Good story".to_string(),
                    content: Some("We summited at dawn.".to_string()),
                    ..Default::default()
                })
                .with_personal_story(PersonalStory {
                    id: "p2".to_string(),
                    title: String::new(),
                    content: Some("Untitled".to_string()),
                    ..Default::default()
                })
                .with_personal_story(PersonalStory {
                    id: "p3".to_string(),
                    title: "Broken provider".to_string(),
                    content: Some("embedding breaks here".to_string()),
                    ..Default::default()
                }),
        );

        let summary = IngestionPipeline::new(store.clone())
            .with_source(Arc::new(ContentRepositorySource::new(
                repository,
                crate::domain::ingestion::RecordKind::PersonalStory,
            )))
            .run()
            .await;

        assert!(!summary.success);
        assert_eq!(summary.documents_processed, 3);
        assert_eq!(summary.documents_added, 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.errors.len(), 2);
        assert!(summary.errors[0].starts_with("Personal story p2: "));
        assert!(summary.errors[1].starts_with("Personal story p3: "));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_failed_source_does_not_stop_the_rest() {
        let store = store(MockEmbeddingProvider::new("test", 8));

        let summary = IngestionPipeline::new(store.clone())
            .with_source(Arc::new(MockDocumentSource::new("export").with_error("file missing")))
            .with_source(Arc::new(
                MockDocumentSource::new("manual")
                    .with_draft("a", draft("Ropes", "Dynamic ropes stretch.", "Gear"))
                    .with_draft("b", draft("Knots", "Figure eight follow through.", "Gear")),
            ))
            .run()
            .await;

        assert!(!summary.success);
        assert_eq!(summary.documents_added, 2);
        assert_eq!(summary.errors, vec!["export source failed: I/O error: file missing"]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_store_order_follows_source_order() {
        let store = store(MockEmbeddingProvider::new("test", 8));

        let pipeline = IngestionPipeline::new(store.clone())
            .with_source(Arc::new(BaselineSource::new()))
            .with_source(Arc::new(
                MockDocumentSource::new("manual").with_draft("x", draft("Extra", "Extra body", "Misc")),
            ));
        assert_eq!(pipeline.source_names(), vec!["baseline", "manual"]);

        let summary = pipeline.run().await;

        assert_eq!(summary.documents_added, 6);
        let documents = store.documents().await;
        assert_eq!(documents[0].title, "High-Altitude Acclimatization Protocol");
        assert_eq!(documents[5].title, "Extra");
    }

    #[tokio::test]
    async fn test_empty_pipeline() {
        let store = store(MockEmbeddingProvider::new("test", 8));

        let summary = IngestionPipeline::new(store).run().await;

        assert!(summary.success);
        assert_eq!(summary.documents_processed, 0);
    }
}
