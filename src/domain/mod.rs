//! Domain layer - Core business logic and entities

pub mod embedding;
pub mod error;
pub mod ingestion;
pub mod knowledge_base;
pub mod llm;

pub use embedding::EmbeddingProvider;
pub use error::DomainError;
pub use ingestion::{DocumentSource, IngestionSummary};
pub use knowledge_base::{KnowledgeStats, KnowledgeStore, RagResponse, SearchParams, SearchResult};
pub use llm::{LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
