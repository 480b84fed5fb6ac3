use std::sync::Arc;

use super::hash::DEFAULT_HASH_DIMENSIONS;
use super::{HashEmbeddingProvider, HttpClient, OpenAiEmbeddingProvider};
use crate::config::{EmbeddingBackend, EmbeddingSettings};
use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;

/// Factory for creating embedding providers
#[derive(Debug)]
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create the configured provider, reading the API key from the environment
    pub fn create(settings: &EmbeddingSettings) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
        let api_key = std::env::var(&settings.api_key_env).ok();
        Self::create_with_key(settings, api_key)
    }

    pub fn create_with_key(
        settings: &EmbeddingSettings,
        api_key: Option<String>,
    ) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
        match settings.provider {
            EmbeddingBackend::Hash => Ok(Arc::new(HashEmbeddingProvider::new(
                settings.dimensions.unwrap_or(DEFAULT_HASH_DIMENSIONS),
            ))),

            EmbeddingBackend::OpenAi => {
                let api_key = api_key.filter(|key| !key.trim().is_empty());

                let provider = match (&settings.base_url, api_key) {
                    (Some(base_url), api_key) => {
                        OpenAiEmbeddingProvider::with_base_url(HttpClient::new(), api_key, base_url)
                    }
                    (None, Some(api_key)) => OpenAiEmbeddingProvider::new(HttpClient::new(), api_key),
                    (None, None) => {
                        return Err(DomainError::configuration(format!(
                            "Embedding provider 'openai' needs {} or a base_url",
                            settings.api_key_env
                        )));
                    }
                };

                let provider = provider.with_model(&settings.model);
                let provider = match settings.dimensions {
                    Some(dimensions) => provider.with_dimensions(dimensions),
                    None => provider,
                };

                Ok(Arc::new(provider))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hash_provider() {
        let provider =
            EmbeddingProviderFactory::create_with_key(&EmbeddingSettings::default(), None).unwrap();

        assert_eq!(provider.provider_name(), "hash");
        assert_eq!(provider.model(), "fnv1a-bow-2048");
    }

    #[test]
    fn test_hash_provider_honours_dimensions() {
        let settings = EmbeddingSettings {
            dimensions: Some(32),
            ..Default::default()
        };

        let provider = EmbeddingProviderFactory::create_with_key(&settings, None).unwrap();

        assert_eq!(provider.model(), "fnv1a-bow-32");
    }

    #[test]
    fn test_openai_with_key() {
        let settings = EmbeddingSettings {
            provider: EmbeddingBackend::OpenAi,
            ..Default::default()
        };

        let provider =
            EmbeddingProviderFactory::create_with_key(&settings, Some("sk-test".to_string()))
                .unwrap();

        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.model(), "text-embedding-3-small");
    }

    #[test]
    fn test_openai_local_gateway_without_key() {
        let settings = EmbeddingSettings {
            provider: EmbeddingBackend::OpenAi,
            base_url: Some("http://localhost:11434".to_string()),
            model: "nomic-embed-text".to_string(),
            ..Default::default()
        };

        let provider = EmbeddingProviderFactory::create_with_key(&settings, None).unwrap();

        assert_eq!(provider.model(), "nomic-embed-text");
    }

    #[test]
    fn test_openai_without_key_or_base_url() {
        let settings = EmbeddingSettings {
            provider: EmbeddingBackend::OpenAi,
            ..Default::default()
        };

        let result = EmbeddingProviderFactory::create_with_key(&settings, Some("  ".to_string()));

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
