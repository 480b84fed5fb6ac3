//! Infrastructure services

mod knowledge_service;
mod rag_service;
mod search_service;

pub use knowledge_service::KnowledgeService;
pub use rag_service::RagService;
pub use search_service::SearchService;
