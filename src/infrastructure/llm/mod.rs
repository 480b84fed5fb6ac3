//! Answer generator implementations

mod extractive;
mod factory;
mod http_client;
mod openai;

pub use extractive::ExtractiveAnswerGenerator;
pub use factory::LlmProviderFactory;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::{OpenAiChatProvider, DEFAULT_OPENAI_BASE_URL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
