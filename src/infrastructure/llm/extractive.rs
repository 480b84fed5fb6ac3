//! Offline answer generator that quotes the best context chunk

use async_trait::async_trait;

use crate::domain::knowledge_base::truncate_chars;
use crate::domain::llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message};
use crate::domain::DomainError;

const SOURCE_PREFIX: &str = "SOURCE: ";
const DEFAULT_EXCERPT_CHARS: usize = 600;

/// Answers with an excerpt of the first `SOURCE:` chunk in the prompt.
///
/// Used when no chat model is configured, so the pipeline still returns
/// grounded text.
#[derive(Debug, Clone)]
pub struct ExtractiveAnswerGenerator {
    excerpt_chars: usize,
}

impl Default for ExtractiveAnswerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveAnswerGenerator {
    pub fn new() -> Self {
        Self {
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    /// First chunk as `(title, body)`
    fn first_chunk(prompt: &str) -> Option<(&str, &str)> {
        let start = prompt.find(SOURCE_PREFIX)? + SOURCE_PREFIX.len();
        let rest = &prompt[start..];

        let (title, rest) = rest.split_once('\n')?;
        let body = rest.split("\n\n").next().unwrap_or_default();

        Some((title.trim(), body.trim()))
    }
}

#[async_trait]
impl LlmProvider for ExtractiveAnswerGenerator {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let prompt = request
            .last_user_message()
            .map(|m| m.content_text())
            .ok_or_else(|| DomainError::provider("extractive", "Request has no user message"))?;

        let (title, body) = Self::first_chunk(prompt)
            .ok_or_else(|| DomainError::provider("extractive", "Prompt carries no context"))?;

        let answer = format!(
            "Based on \"{}\": {}",
            title,
            truncate_chars(body, self.excerpt_chars)
        );

        Ok(LlmResponse::new("extractive", model, Message::assistant(answer))
            .with_finish_reason(FinishReason::Stop))
    }

    fn provider_name(&self) -> &'static str {
        "extractive"
    }
}
