//! Document store trait definition

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use super::document::{DocumentDraft, DocumentSummary, KnowledgeDocument};
use super::stats::KnowledgeStats;
use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;

/// Append-only catalog of embedded knowledge documents.
///
/// A store embeds through exactly one provider. Once the first document is
/// stored its dimensionality is pinned and later vectors must match.
#[async_trait]
pub trait KnowledgeStore: Send + Sync + Debug {
    /// Embed the draft content and append the document, returning its id
    async fn add_document(&self, draft: DocumentDraft) -> Result<String, DomainError>;

    /// Snapshot of all documents in insertion order
    async fn documents(&self) -> Vec<Arc<KnowledgeDocument>>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Pinned vector dimensionality, `None` while the store is empty
    async fn embedding_dimensions(&self) -> Option<usize>;

    /// The provider documents were embedded with; queries must use it too
    fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider>;

    async fn stats(&self) -> KnowledgeStats {
        let documents = self.documents().await;
        KnowledgeStats::from_documents(documents.iter().map(Arc::as_ref))
    }

    /// Document summaries without content bodies or vectors
    async fn export(&self) -> Vec<DocumentSummary> {
        self.documents()
            .await
            .iter()
            .map(|document| document.summary())
            .collect()
    }
}
