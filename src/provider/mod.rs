// Provider adapters — trait-based abstraction over swappable upstream
// LLM backends.
//
// The TopicProvider trait defines the interface. GatewayProvider uses an
// OpenAI-compatible gateway with forced tool-calling (schema-validated
// output); OpenAiProvider asks for a bare JSON array via the prompt alone
// and leans on the more permissive completion normalizer. The backend is
// chosen by configuration, not by duplicating the pipeline around it.

pub mod gateway;
pub mod openai;
pub mod prompt;
pub mod traits;

use std::sync::Arc;

use crate::config::{Config, ProviderBackend};

pub use traits::TopicProvider;

/// Build the configured provider adapter.
pub fn build_provider(config: &Config) -> Arc<dyn TopicProvider> {
    match config.provider_backend {
        ProviderBackend::Gateway => Arc::new(gateway::GatewayProvider::new(
            config.gateway_api_key.clone(),
            config.gateway_url.clone(),
            config.gateway_model.clone(),
        )),
        ProviderBackend::OpenAi => Arc::new(openai::OpenAiProvider::new(
            config.openai_api_key.clone(),
            config.openai_url.clone(),
            config.openai_model.clone(),
        )),
    }
}
