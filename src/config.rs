use std::env;

use anyhow::Result;

use crate::provider::{gateway, openai};

/// Which upstream LLM backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderBackend {
    /// OpenAI-compatible gateway with forced tool-calling (default) —
    /// output shape is schema-validated by the provider
    Gateway,
    /// Direct OpenAI completion — bare JSON array by prompt discipline,
    /// normalized permissively
    OpenAi,
}

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Which topic provider to use (default: Gateway)
    pub provider_backend: ProviderBackend,
    pub gateway_api_key: String,
    pub gateway_url: String,
    pub gateway_model: String,
    pub openai_api_key: String,
    pub openai_url: String,
    pub openai_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Endpoints and models have defaults; API keys do not. A missing
    /// key is caught by `require_provider` at startup, or at call time
    /// by the adapter itself.
    pub fn load() -> Result<Self> {
        let provider_backend = match env::var("EXTRAKT_PROVIDER").as_deref() {
            Ok("openai") => ProviderBackend::OpenAi,
            // "gateway" or unset both default to the gateway
            _ => ProviderBackend::Gateway,
        };

        Ok(Self {
            provider_backend,
            gateway_api_key: env::var("AI_GATEWAY_API_KEY").unwrap_or_default(),
            gateway_url: env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| gateway::DEFAULT_GATEWAY_URL.to_string()),
            gateway_model: env::var("AI_GATEWAY_MODEL")
                .unwrap_or_else(|_| gateway::DEFAULT_GATEWAY_MODEL.to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| openai::DEFAULT_OPENAI_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| openai::DEFAULT_OPENAI_MODEL.to_string()),
        })
    }

    /// Check that the chosen provider backend has its API key.
    /// Call this before serving so misconfiguration is reported at
    /// startup instead of on the first request.
    pub fn require_provider(&self) -> Result<()> {
        match self.provider_backend {
            ProviderBackend::Gateway => {
                if self.gateway_api_key.is_empty() {
                    anyhow::bail!(
                        "AI_GATEWAY_API_KEY not set. Add it to your .env file.\n\
                         Or set EXTRAKT_PROVIDER=openai to use the OpenAI backend instead."
                    );
                }
                Ok(())
            }
            ProviderBackend::OpenAi => {
                if self.openai_api_key.is_empty() {
                    anyhow::bail!(
                        "OPENAI_API_KEY not set. Add it to your .env file.\n\
                         Or set EXTRAKT_PROVIDER=gateway to use the gateway backend instead."
                    );
                }
                Ok(())
            }
        }
    }
}
