use std::sync::Arc;
use std::time::Duration;

use super::http_client::HttpClient;
use super::{ExtractiveAnswerGenerator, OpenAiChatProvider};
use crate::config::{GeneratorBackend, GeneratorSettings};
use crate::domain::llm::LlmProvider;
use crate::domain::DomainError;

/// Factory for creating answer generators
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the configured generator, reading the API key from the environment
    pub fn create(settings: &GeneratorSettings) -> Result<Arc<dyn LlmProvider>, DomainError> {
        let api_key = std::env::var(&settings.api_key_env).ok();
        Self::create_with_key(settings, api_key)
    }

    pub fn create_with_key(
        settings: &GeneratorSettings,
        api_key: Option<String>,
    ) -> Result<Arc<dyn LlmProvider>, DomainError> {
        match settings.provider {
            GeneratorBackend::Extractive => Ok(Arc::new(ExtractiveAnswerGenerator::new())),

            GeneratorBackend::OpenAi => {
                let http_client = match settings.timeout_secs {
                    Some(secs) => HttpClient::with_timeout(Duration::from_secs(secs))?,
                    None => HttpClient::new(),
                };
                let api_key = api_key.filter(|key| !key.trim().is_empty());

                match (&settings.base_url, api_key) {
                    (Some(base_url), api_key) => Ok(Arc::new(OpenAiChatProvider::with_base_url(
                        http_client,
                        api_key,
                        base_url,
                    ))),
                    (None, Some(api_key)) => {
                        Ok(Arc::new(OpenAiChatProvider::new(http_client, api_key)))
                    }
                    (None, None) => Err(DomainError::configuration(format!(
                        "Generator 'openai' needs {} or a base_url",
                        settings.api_key_env
                    ))),
                }
            }
        }
    }
}
