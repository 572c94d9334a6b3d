use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, Proxy, StatusCode};
use serde::{Deserialize, Serialize};

use crate::app_config::OpenAiConfig;
use crate::errors::{AppError, ProviderError};
use crate::providers::{ChatProvider, classify_transport_error};

/// System message sent ahead of every user prompt
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// OpenAI client for interacting with OpenAI-compatible chat APIs
pub struct OpenAi {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base endpoint URL (e.g. "https://api.openai.com/v1")
    endpoint: String,
    /// Model used when a request carries no override
    default_model: String,
}

/// OpenAI chat-completion request
#[derive(Debug, Default, Serialize)]
pub struct OpenAiRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<OpenAiMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// OpenAI message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u64,
    /// Number of completion tokens
    pub completion_tokens: u64,
    /// Total number of tokens
    pub total_tokens: u64,
}

/// OpenAI chat-completion response
#[derive(Debug, Deserialize)]
pub struct OpenAiResponse {
    /// The generated completions
    pub choices: Vec<OpenAiChoice>,
    /// Token usage information, when the service reports it
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Individual completion in an OpenAI response
#[derive(Debug, Deserialize)]
pub struct OpenAiChoice {
    /// The generated message
    pub message: OpenAiMessage,
}

impl OpenAiRequest {
    /// Create a new chat-completion request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(OpenAiMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl OpenAi {
    /// Create a new OpenAI client from a resolved configuration.
    ///
    /// Fails when the HTTP client cannot be built, e.g. with a proxy URL
    /// reqwest rejects.
    pub fn new(config: &OpenAiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(120));

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                AppError::Unknown(format!("Failed to configure proxy {}: {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Unknown(format!("Failed to build OpenAI HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            default_model: config.model.clone(),
        })
    }

    /// The model used when a request carries no override.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Complete a chat request
    pub async fn complete(&self, request: OpenAiRequest) -> Result<OpenAiResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport_error("OpenAI API", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimitExceeded(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<OpenAiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("OpenAI API response: {}", e)))
    }
}

#[async_trait]
impl ChatProvider for OpenAi {
    /// Send a two-message exchange (fixed system role plus the user prompt)
    /// and return the first completion's text with a trailing newline
    /// appended.
    async fn chat(&self, prompt: &str, model: Option<&str>) -> Result<String, ProviderError> {
        let request = OpenAiRequest::new(model.unwrap_or(&self.default_model))
            .add_message("system", SYSTEM_PROMPT)
            .add_message("user", prompt);

        let response = self.complete(request).await?;
        let choice = response
            .choices
            .first()
            .ok_or_else(|| ProviderError::ParseError("response contained no choices".to_string()))?;

        Ok(format!("{}\n", choice.message.content))
    }
}
