//! Retrieval-augmented answering

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, instrument};

use super::SearchService;
use crate::domain::knowledge_base::{
    calibrated_confidence, coaching_request, ContextAssembler, RagResponse, RetrievalConfig,
    SearchParams,
};
use crate::domain::llm::{LlmProvider, LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Answers questions from the knowledge store through a generator
#[derive(Debug)]
pub struct RagService {
    search: Arc<SearchService>,
    generator: Arc<dyn LlmProvider>,
    model: String,
    config: RetrievalConfig,
}

impl RagService {
    pub fn new(
        search: Arc<SearchService>,
        generator: Arc<dyn LlmProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            search,
            generator,
            model: model.into(),
            config: RetrievalConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Answer a question.
    ///
    /// Weak retrieval yields the fallback response rather than an error.
    /// Provider failures, including an expired generation deadline, propagate.
    #[instrument(skip(self), fields(generator = self.generator.provider_name()))]
    pub async fn answer(&self, question: &str) -> Result<RagResponse, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::validation("Question must not be empty"));
        }

        let params = SearchParams::new(question)
            .with_limit(self.config.limit)
            .with_similarity_threshold(self.config.similarity_threshold);
        let results = self.search.search(&params).await?;

        let weak = results
            .first()
            .is_none_or(|top| top.similarity < self.config.fallback_similarity);
        if weak {
            info!(results = results.len(), "No relevant knowledge, using fallback answer");
            return Ok(RagResponse::fallback(
                self.config.fallback_answer.clone(),
                self.config.fallback_confidence,
            ));
        }

        let assembled = ContextAssembler::new(self.config.context_budget)
            .with_chunk_chars(self.config.chunk_chars)
            .assemble(&results);
        debug!(
            chunks = assembled.context_used.len(),
            chars = assembled.char_len(),
            "Assembled context"
        );

        let request = coaching_request(
            &assembled.context,
            question,
            self.config.temperature,
            self.config.max_tokens,
        );
        let response = self.generate(request).await?;

        let confidence = calibrated_confidence(&results, self.config.confidence_factor);
        info!(sources = results.len(), confidence, "Answer generated");

        Ok(RagResponse {
            answer: response.content().to_string(),
            sources: results,
            context_used: assembled.context_used,
            confidence,
        })
    }

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let future = self.generator.chat(&self.model, request);

        match self.config.generation_timeout_secs {
            Some(secs) => match timeout(Duration::from_secs(secs), future).await {
                Ok(result) => result,
                Err(_) => Err(DomainError::provider(
                    self.generator.provider_name(),
                    format!("Generation timed out after {}s", secs),
                )),
            },
            None => future.await,
        }
    }
}
