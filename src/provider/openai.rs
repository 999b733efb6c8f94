// Direct-completion backend — OpenAI chat completions.
//
// No tool schema: the system prompt alone instructs the model to answer
// with a bare JSON array of topic strings. Models under prompt-only
// discipline wrap their array inconsistently, so the completion text
// goes through the multi-shape normalizer instead of the strict
// tool-argument one.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prompt;
use super::traits::TopicProvider;
use crate::error::ExtractError;
use crate::normalize;

/// Default OpenAI chat-completions endpoint.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for direct completion.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Direct-completion topic provider.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider. An empty API key is accepted here
    /// and rejected at call time, so construction never fails.
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl TopicProvider for OpenAiProvider {
    async fn extract_topics(&self, transcript: &str) -> Result<Vec<String>, ExtractError> {
        // Credential check before any network traffic
        if self.api_key.is_empty() {
            warn!("OPENAI_API_KEY is not configured");
            return Err(ExtractError::Configuration);
        }

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: prompt::COMPLETION_SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: prompt::user_prompt(transcript),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                ExtractError::Upstream
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "OpenAI returned an error status");
            return Err(ExtractError::from_upstream_status(status));
        }

        let reply: CompletionResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse OpenAI response");
            ExtractError::MalformedResponse
        })?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                warn!("No completion content in OpenAI response");
                ExtractError::MalformedResponse
            })?;

        let topics = normalize::topics_from_completion_text(&content)?;
        debug!(count = topics.len(), "Extracted topics via completion");
        Ok(topics)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// --- Chat-completions request/response types ---

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}
