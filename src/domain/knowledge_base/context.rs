//! Packs ranked results into a bounded context string for the generator

use serde::{Deserialize, Serialize};

use super::search::SearchResult;

pub const DEFAULT_CONTEXT_BUDGET: usize = 3000;
pub const DEFAULT_CHUNK_CHARS: usize = 1500;
pub const TRUNCATION_MARKER: &str = "...";

/// Context text plus the titles that made it in, in rank order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembledContext {
    pub context: String,
    pub context_used: Vec<String>,
}

impl AssembledContext {
    pub fn is_empty(&self) -> bool {
        self.context_used.is_empty()
    }

    /// Length of the context in characters
    pub fn char_len(&self) -> usize {
        self.context.chars().count()
    }
}

/// Builds `SOURCE: <title>` chunks until the character budget is reached.
///
/// All lengths are Unicode scalar values. Assembly stops at the first chunk
/// that would overflow the budget, even if a later, shorter one would fit.
#[derive(Debug, Clone, Copy)]
pub struct ContextAssembler {
    budget_chars: usize,
    chunk_chars: usize,
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_BUDGET)
    }
}

impl ContextAssembler {
    pub fn new(budget_chars: usize) -> Self {
        Self {
            budget_chars,
            chunk_chars: DEFAULT_CHUNK_CHARS,
        }
    }

    pub fn with_chunk_chars(mut self, chunk_chars: usize) -> Self {
        self.chunk_chars = chunk_chars;
        self
    }

    pub fn assemble(&self, results: &[SearchResult]) -> AssembledContext {
        let mut assembled = AssembledContext::default();
        let mut length = 0;

        for result in results {
            let chunk = format!(
                "SOURCE: {}\n{}\n\n",
                result.document.title,
                truncate_chars(&result.document.content, self.chunk_chars)
            );
            let chunk_len = chunk.chars().count();

            if length + chunk_len > self.budget_chars {
                tracing::debug!(
                    title = %result.document.title,
                    used = length,
                    budget = self.budget_chars,
                    "Context budget reached"
                );
                break;
            }

            length += chunk_len;
            assembled.context.push_str(&chunk);
            assembled.context_used.push(result.document.title.clone());
        }

        assembled
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
