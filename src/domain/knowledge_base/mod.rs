//! Knowledge base domain - documents, ranking and answer assembly

mod config;
mod context;
mod document;
mod metadata;
mod prompt;
mod response;
mod search;
mod stats;
mod store;
pub mod vocabulary;

pub use config::{RetrievalConfig, DEFAULT_FALLBACK_ANSWER};
pub use context::{truncate_chars, AssembledContext, ContextAssembler};
pub use document::{slugify, DocumentDraft, DocumentSummary, KnowledgeDocument};
pub use metadata::{DifficultyLevel, DocumentMetadata, MountainType};
pub use prompt::{build_coaching_prompt, coaching_request, COACH_SYSTEM_PROMPT};
pub use response::{calibrated_confidence, RagResponse};
pub use search::{extract_keywords, keyword_boost, rank_documents, SearchParams, SearchResult};
pub use stats::KnowledgeStats;
pub use store::KnowledgeStore;
