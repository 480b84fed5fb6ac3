mod app_config;

pub use app_config::{
    AppConfig, EmbeddingBackend, EmbeddingSettings, GeneratorBackend, GeneratorSettings,
    IngestionSettings, LogFormat, LoggingConfig,
};
