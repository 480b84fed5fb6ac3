//! Retrieval and answer tuning

use serde::{Deserialize, Serialize};

use super::context::{DEFAULT_CHUNK_CHARS, DEFAULT_CONTEXT_BUDGET};

pub const DEFAULT_FALLBACK_ANSWER: &str = "Summit Chronicles database is still populating information and blogs, you can reach out directly to Sunith for more specific answers.";

/// Knobs for search, context assembly and confidence scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Results requested per question
    pub limit: usize,
    /// Minimum cosine similarity for a document to be retrieved
    pub similarity_threshold: f32,
    /// Below this top similarity the fallback answer is returned
    pub fallback_similarity: f32,
    pub fallback_confidence: f32,
    pub fallback_answer: String,
    /// Context budget in characters
    pub context_budget: usize,
    /// Per-document cap in characters
    pub chunk_chars: usize,
    /// Multiplier applied to mean similarity to get confidence
    pub confidence_factor: f32,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Deadline for the generator call; none when unset
    pub generation_timeout_secs: Option<u64>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            similarity_threshold: 0.6,
            fallback_similarity: 0.45,
            fallback_confidence: 0.1,
            fallback_answer: DEFAULT_FALLBACK_ANSWER.to_string(),
            context_budget: DEFAULT_CONTEXT_BUDGET,
            chunk_chars: DEFAULT_CHUNK_CHARS,
            confidence_factor: 1.2,
            temperature: 0.7,
            max_tokens: 1000,
            generation_timeout_secs: None,
        }
    }
}

impl RetrievalConfig {
    pub fn with_generation_timeout_secs(mut self, secs: u64) -> Self {
        self.generation_timeout_secs = Some(secs);
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_fallback_answer(mut self, answer: impl Into<String>) -> Self {
        self.fallback_answer = answer.into();
        self
    }
}
