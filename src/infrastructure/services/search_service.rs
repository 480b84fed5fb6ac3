//! Semantic search over the knowledge store

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use crate::domain::ingestion::IngestionSummary;
use crate::domain::knowledge_base::{rank_documents, KnowledgeStore, SearchParams, SearchResult};
use crate::domain::DomainError;
use crate::infrastructure::ingestion::IngestionPipeline;

/// Search service owning the store handle and its one-time bootstrap
#[derive(Debug)]
pub struct SearchService {
    store: Arc<dyn KnowledgeStore>,
    bootstrap: Option<IngestionPipeline>,
    initialized: OnceCell<IngestionSummary>,
}

impl SearchService {
    pub fn new(store: Arc<dyn KnowledgeStore>) -> Self {
        Self {
            store,
            bootstrap: None,
            initialized: OnceCell::new(),
        }
    }

    /// Pipeline run the first time an empty store is searched
    pub fn with_bootstrap(mut self, pipeline: IngestionPipeline) -> Self {
        self.bootstrap = Some(pipeline);
        self
    }

    pub fn store(&self) -> &Arc<dyn KnowledgeStore> {
        &self.store
    }

    /// Run the bootstrap pipeline at most once, however many callers race here.
    ///
    /// Later calls return the summary of that first run.
    pub async fn ensure_initialized(&self) -> &IngestionSummary {
        self.initialized
            .get_or_init(|| async {
                let Some(ref pipeline) = self.bootstrap else {
                    debug!("No bootstrap pipeline configured");
                    return IngestionSummary::new();
                };

                info!(sources = ?pipeline.source_names(), "Bootstrapping knowledge store");
                let summary = pipeline.run().await;

                if !summary.success {
                    warn!(
                        errors = summary.errors.len(),
                        added = summary.documents_added,
                        "Bootstrap finished with errors"
                    );
                }

                summary
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Rank stored documents against the query.
    ///
    /// An empty store triggers the bootstrap; if it is still empty afterwards the
    /// result is empty and the embedding provider is never called.
    #[instrument(skip(self, params), fields(query = %params.query, limit = params.limit))]
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, DomainError> {
        if self.store.is_empty().await {
            self.ensure_initialized().await;

            if self.store.is_empty().await {
                debug!("Knowledge store is empty");
                return Ok(Vec::new());
            }
        }

        let query_embedding = self.store.embedding_provider().embed(&params.query).await?;
        let documents = self.store.documents().await;

        let results = rank_documents(&documents, &query_embedding, params);

        debug!(
            documents = documents.len(),
            results = results.len(),
            "Search completed"
        );

        Ok(results)
    }
}
