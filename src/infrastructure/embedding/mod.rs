//! Embedding provider implementations

mod factory;
mod hash;
mod openai;

pub use factory::EmbeddingProviderFactory;
pub use hash::{HashEmbeddingProvider, DEFAULT_HASH_DIMENSIONS};
pub use openai::{OpenAiEmbeddingProvider, DEFAULT_EMBEDDING_MODEL};

// Re-export HTTP client for use by embedding providers
pub use super::llm::{HttpClient, HttpClientTrait};
