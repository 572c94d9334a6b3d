/*!
 * Provider implementations for chat-completion backends.
 *
 * This module contains client implementations for the supported services:
 * - OpenAI: hosted OpenAI-compatible API
 * - Ollama: local or network-reachable LLM server
 *
 * The selected backend is resolved once into a [`BackendClient`] variant, so
 * call sites dispatch on a tag instead of comparing strings.
 */

use async_trait::async_trait;

use crate::app_config::{BackendConfig, BackendKind};
use crate::errors::{AppError, ProviderError};

pub mod ollama;
pub mod openai;

/// Common capability of all chat-completion backends
///
/// Given a prompt and an optional model override, a provider returns the
/// generated text or a classified failure. Whitespace post-processing is
/// backend-specific; callers must not assume parity between backends.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one prompt and return the generated text.
    async fn chat(&self, prompt: &str, model: Option<&str>) -> Result<String, ProviderError>;
}

/// The backend selected for this run
pub enum BackendClient {
    /// Hosted OpenAI-compatible service
    OpenAi(openai::OpenAi),
    /// Ollama server
    Ollama(ollama::Ollama),
}

impl BackendClient {
    /// Build the client matching a resolved configuration.
    ///
    /// Construction can fail (e.g. the underlying HTTP client cannot be
    /// built with the configured proxy); that is fatal at startup.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AppError> {
        match config {
            BackendConfig::OpenAi(openai_config) => {
                Ok(Self::OpenAi(openai::OpenAi::new(openai_config)?))
            }
            BackendConfig::Ollama(ollama_config) => {
                Ok(Self::Ollama(ollama::Ollama::new(ollama_config)))
            }
        }
    }

    /// Which backend this client talks to.
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::OpenAi(_) => BackendKind::OpenAi,
            Self::Ollama(_) => BackendKind::Ollama,
        }
    }

    /// The model used when a request carries no override.
    pub fn default_model(&self) -> &str {
        match self {
            Self::OpenAi(client) => client.default_model(),
            Self::Ollama(client) => client.default_model(),
        }
    }
}

#[async_trait]
impl ChatProvider for BackendClient {
    async fn chat(&self, prompt: &str, model: Option<&str>) -> Result<String, ProviderError> {
        match self {
            Self::OpenAi(client) => client.chat(prompt, model).await,
            Self::Ollama(client) => client.chat(prompt, model).await,
        }
    }
}

/// Map a reqwest transport error onto the provider error taxonomy.
pub(crate) fn classify_transport_error(backend: &str, error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(format!("{} request timed out: {}", backend, error))
    } else if error.is_connect() {
        ProviderError::ConnectionError(format!("Failed to connect to {}: {}", backend, error))
    } else {
        ProviderError::RequestFailed(format!("{} request failed: {}", backend, error))
    }
}
