//! Knowledge store implementations

mod in_memory;
mod seed;

pub use in_memory::InMemoryKnowledgeStore;
pub use seed::{baseline_drafts, BaselineSource};
