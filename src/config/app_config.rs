use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::knowledge_base::RetrievalConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub embedding: EmbeddingSettings,
    pub generator: GeneratorSettings,
    pub retrieval: RetrievalConfig,
    pub ingestion: IngestionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    OpenAi,
    #[default]
    Hash,
}

/// Which embedding provider to build and how to reach it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub provider: EmbeddingBackend,
    pub model: String,
    /// OpenAI-compatible endpoint; the public API when unset
    pub base_url: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Requested vector size (hash provider always honours it)
    pub dimensions: Option<usize>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: EmbeddingBackend::default(),
            model: "text-embedding-3-small".to_string(),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            dimensions: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorBackend {
    OpenAi,
    #[default]
    Extractive,
}

/// Which answer generator to build and how to reach it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub provider: GeneratorBackend,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key_env: String,
    /// HTTP timeout for generator calls
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            provider: GeneratorBackend::default(),
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: None,
        }
    }
}

/// Where content comes from at ingestion time
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IngestionSettings {
    /// Directory of Markdown files with front matter
    pub content_dir: Option<PathBuf>,
    /// JSON content export
    pub records_file: Option<PathBuf>,
    /// Whether to load the baseline coaching documents
    pub seed_baseline: bool,
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            content_dir: Some(PathBuf::from("content/blog")),
            records_file: None,
            seed_baseline: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
