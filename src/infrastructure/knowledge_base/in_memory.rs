//! In-memory knowledge store, rebuilt on every process start

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::knowledge_base::{DocumentDraft, KnowledgeDocument, KnowledgeStore};
use crate::domain::DomainError;

/// Append-only store holding documents and their embeddings in memory
#[derive(Debug)]
pub struct InMemoryKnowledgeStore {
    embedder: Arc<dyn EmbeddingProvider>,
    documents: RwLock<Vec<Arc<KnowledgeDocument>>>,
}

impl InMemoryKnowledgeStore {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedder,
            documents: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn add_document(&self, draft: DocumentDraft) -> Result<String, DomainError> {
        // Not holding the write lock across the provider call
        let embedding = self.embedder.embed(draft.content()).await?;

        if embedding.is_empty() {
            return Err(DomainError::provider(
                self.embedder.provider_name(),
                format!("Empty embedding for '{}'", draft.title()),
            ));
        }

        let mut documents = self.documents.write().await;

        if let Some(first) = documents.first() {
            let pinned = first.embedding_dimensions();
            if pinned != embedding.len() {
                return Err(DomainError::validation(format!(
                    "Embedding for '{}' has {} dimensions, store holds {}",
                    draft.title(),
                    embedding.len(),
                    pinned
                )));
            }
        }

        let document = draft.into_document(embedding, Utc::now());
        let id = document.id.clone();

        debug!(id = %id, category = %document.category, "Stored knowledge document");
        documents.push(Arc::new(document));

        Ok(id)
    }

    async fn documents(&self) -> Vec<Arc<KnowledgeDocument>> {
        self.documents.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    async fn embedding_dimensions(&self) -> Option<usize> {
        self.documents
            .read()
            .await
            .first()
            .map(|document| document.embedding_dimensions())
    }

    fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedder)
    }
}
