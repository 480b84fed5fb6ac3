//! Operation surface over the knowledge store: ingest, stats, ask

use std::sync::Arc;

use crate::domain::ingestion::IngestionSummary;
use crate::domain::knowledge_base::{
    DocumentSummary, KnowledgeStats, KnowledgeStore, RagResponse, SearchParams, SearchResult,
};
use crate::domain::DomainError;

use super::{RagService, SearchService};

/// Facade a thin API or CLI layer calls into
#[derive(Debug)]
pub struct KnowledgeService {
    search: Arc<SearchService>,
    rag: RagService,
}

impl KnowledgeService {
    pub fn new(search: Arc<SearchService>, rag: RagService) -> Self {
        Self { search, rag }
    }

    fn store(&self) -> &Arc<dyn KnowledgeStore> {
        self.search.store()
    }

    /// Populate the store from the configured sources.
    ///
    /// Runs once per process; repeated calls return the first run's summary.
    pub async fn ingest(&self) -> IngestionSummary {
        self.search.ensure_initialized().await.clone()
    }

    pub async fn stats(&self) -> KnowledgeStats {
        self.store().stats().await
    }

    pub async fn export(&self) -> Vec<DocumentSummary> {
        self.store().export().await
    }

    pub async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, DomainError> {
        self.search.search(params).await
    }

    pub async fn ask(&self, question: &str) -> Result<RagResponse, DomainError> {
        self.rag.answer(question).await
    }
}
