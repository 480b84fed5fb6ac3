use serde::{Deserialize, Serialize};

use super::search::SearchResult;

/// Answer to a question, with the evidence behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagResponse {
    pub answer: String,
    pub sources: Vec<SearchResult>,
    /// Titles packed into the generator context, in rank order
    pub context_used: Vec<String>,
    pub confidence: f32,
}

impl RagResponse {
    /// Answer returned when retrieval found nothing trustworthy
    pub fn fallback(answer: impl Into<String>, confidence: f32) -> Self {
        Self {
            answer: answer.into(),
            sources: Vec::new(),
            context_used: Vec::new(),
            confidence,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Mean similarity of `results` scaled by `factor`, capped at 1.0
pub fn calibrated_confidence(results: &[SearchResult], factor: f32) -> f32 {
    if results.is_empty() {
        return 0.0;
    }

    let mean = results.iter().map(|r| r.similarity).sum::<f32>() / results.len() as f32;
    (mean * factor).clamp(0.0, 1.0)
}
