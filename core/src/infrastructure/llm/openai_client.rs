use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    contract::{
        ports::LLMClient,
        value_objects::{GenerationRequest, UserContent},
    },
};

/// Client for an OpenAI-compatible Chat Completions endpoint using
/// `json_schema` structured outputs.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn chat_request(request: GenerationRequest) -> ChatCompletionRequest {
        let user_content = match request.user_content {
            UserContent::Text(text) => MessageContent::Text(text),
            UserContent::TextWithImage { text, image } => MessageContent::Parts(vec![
                ContentPart::Text { text },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_uri(),
                        detail: "high",
                    },
                },
            ]),
        };

        ChatCompletionRequest {
            model: request.model,
            temperature: request.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(request.system_prompt),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: request.schema_name.to_string(),
                    strict: true,
                    schema: request.response_schema,
                },
            },
        }
    }

    fn message_content(response: ChatCompletionResponse) -> Result<String, CoreError> {
        let message = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| CoreError::GenerationFailure("No response from LLM".to_string()))?;

        if let Some(refusal) = message.refusal {
            tracing::warn!("LLM refused the request: {}", refusal);
            return Err(CoreError::GenerationFailure(format!(
                "LLM refused the request: {}",
                refusal
            )));
        }

        message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CoreError::GenerationFailure("LLM returned empty content".to_string()))
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let timeout = request.timeout;

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&Self::chat_request(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM API request failed: {}", e);
                if e.is_timeout() {
                    CoreError::GenerationFailure(format!("LLM call timed out after {:?}", timeout))
                } else {
                    CoreError::GenerationFailure(format!("LLM API error: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::GenerationFailure(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::GenerationFailure(format!("Failed to parse LLM response: {}", e))
        })?;

        Self::message_content(completion)
    }
}
