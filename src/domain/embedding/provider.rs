//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for embedding providers (OpenAI-compatible APIs, local hashing, etc.)
///
/// Every vector a store holds and every query it is searched with must come
/// from the same provider and model, otherwise similarities are meaningless.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate the embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Generate embeddings for several texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        let mut vectors = Vec::with_capacity(texts.len());

        for text in texts {
            vectors.push(self.embed(text).await?);
        }

        Ok(vectors)
    }

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the model the provider embeds with
    fn model(&self) -> &str;
}
