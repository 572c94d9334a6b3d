use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::app_config::OllamaConfig;
use crate::errors::ProviderError;
use crate::providers::{ChatProvider, classify_transport_error};

/// Ollama client for interacting with the Ollama API
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Model used when a request carries no override
    default_model: String,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat request for the Ollama API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// Model name to use for generation
    model: String,
    /// Messages of the conversation
    messages: Vec<ChatMessage>,
    /// Whether to stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Chat response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Model name
    pub model: String,
    /// Creation timestamp
    pub created_at: String,
    /// Response message
    pub message: ChatMessage,
    /// Whether the generation is complete
    pub done: bool,
}

impl ChatRequest {
    /// Create a new chat request with streaming disabled
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: Some(false),
        }
    }
}

impl Ollama {
    /// Create a new Ollama client from a resolved configuration.
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            default_model: config.model.clone(),
        }
    }

    /// The model used when a request carries no override.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Chat with the Ollama API
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport_error("Ollama API", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimitExceeded(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Ollama API response: {}", e)))
    }
}

#[async_trait]
impl ChatProvider for Ollama {
    /// Send a single user-role message and return the response's message
    /// content verbatim. Unlike the OpenAI backend, no trailing newline is
    /// appended.
    async fn chat(&self, prompt: &str, model: Option<&str>) -> Result<String, ProviderError> {
        let request = ChatRequest::new(
            model.unwrap_or(&self.default_model),
            vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        );

        let response = self.complete(request).await?;
        Ok(response.message.content)
    }
}
