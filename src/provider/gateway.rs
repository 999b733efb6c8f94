// Tool-calling backend — OpenAI-compatible AI gateway.
//
// Declares an `extract_topics` function tool whose parameter schema pins
// the output to an array of 5-7 strings, and forces the model to call it
// via tool_choice. Format enforcement happens inside the provider's
// structured-output mechanism, which makes this the more reliable of the
// two backends and the default.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::prompt;
use super::traits::TopicProvider;
use crate::error::ExtractError;
use crate::normalize;

/// Default gateway endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default model routed through the gateway.
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";

/// Tool-calling topic provider.
pub struct GatewayProvider {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GatewayProvider {
    /// Create a new gateway provider. An empty API key is accepted here
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
impl TopicProvider for GatewayProvider {
    async fn extract_topics(&self, transcript: &str) -> Result<Vec<String>, ExtractError> {
        // Credential check before any network traffic
        if self.api_key.is_empty() {
            warn!("AI_GATEWAY_API_KEY is not configured");
            return Err(ExtractError::Configuration);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: prompt::user_prompt(transcript),
                },
            ],
            tools: Some(vec![Tool {
                r#type: "function",
                function: ToolFunction {
                    name: "extract_topics",
                    description: "Extrahiert die wichtigsten Themen aus einem Transkript",
                    parameters: topics_schema(),
                },
            }]),
            tool_choice: Some(json!({
                "type": "function",
                "function": { "name": "extract_topics" }
            })),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gateway request failed");
                ExtractError::Upstream
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Gateway returned an error status");
            return Err(ExtractError::from_upstream_status(status));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse gateway response");
            ExtractError::MalformedResponse
        })?;

        // The payload of interest is the forced tool call's arguments
        let tool_call = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.tool_calls)
            .and_then(|calls| calls.into_iter().next())
            .ok_or_else(|| {
                warn!("No tool call found in gateway response");
                ExtractError::MalformedResponse
            })?;

        if tool_call.function.name != "extract_topics" {
            warn!(name = %tool_call.function.name, "Unexpected tool call");
            return Err(ExtractError::MalformedResponse);
        }

        let topics = normalize::topics_from_tool_arguments(&tool_call.function.arguments)?;
        debug!(count = topics.len(), "Extracted topics via tool call");
        Ok(topics)
    }

    fn name(&self) -> &'static str {
        "gateway"
    }
}

/// JSON schema for the `extract_topics` tool parameters: an array of
/// 5-7 "Titel: Beschreibung" strings.
fn topics_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "topics": {
                "type": "array",
                "items": {
                    "type": "string",
                    "description": "Ein Thema im Format 'Titel: Beschreibung'"
                },
                "minItems": 5,
                "maxItems": 7
            }
        },
        "required": ["topics"],
        "additionalProperties": false
    })
}

// --- Chat-completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<Value>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct Tool {
    r#type: &'static str,
    function: ToolFunction,
}

#[derive(Serialize)]
struct ToolFunction {
    name: &'static str,
    description: &'static str,
    parameters: Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Deserialize)]
struct ToolCall {
    function: ToolCallFunction,
}

#[derive(Deserialize)]
struct ToolCallFunction {
    name: String,
    /// JSON-encoded arguments, e.g. `{"topics": ["...", ...]}`
    arguments: String,
}
