//! Application configuration module
//!
//! Backend configuration is resolved once at startup from the process
//! environment and handed to the client constructors by value, so no
//! module-level state is read after launch.

use std::env;

use anyhow::{Result, anyhow};
use url::Url;

use crate::errors::AppError;

/// Translation backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Hosted OpenAI-compatible chat-completion API
    #[default]
    OpenAi,
    /// Local or network-reachable Ollama server
    Ollama,
}

impl BackendKind {
    // @returns: Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Ollama => "Ollama",
        }
    }

    // @returns: Lowercase backend identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::OpenAi => "openai".to_string(),
            Self::Ollama => "ollama".to_string(),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            _ => Err(anyhow!("Invalid backend type: {}", s)),
        }
    }
}

/// OpenAI-compatible service configuration
///
/// All three primary settings are required; translation never starts
/// without them.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for the service
    pub api_key: String,

    /// Base endpoint URL (e.g. "https://api.openai.com/v1")
    pub endpoint: String,

    /// Default model name used when a request carries no override
    pub model: String,

    /// Optional HTTP(S) proxy URL for all requests
    pub proxy: Option<String>,
}

/// Ollama service configuration
///
/// Everything falls back to built-in defaults, so a local Ollama install
/// works with no environment setup at all.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Service endpoint URL
    pub endpoint: String,

    /// Default model name used when a request carries no override
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: default_ollama_endpoint(),
            model: default_ollama_model(),
        }
    }
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "qwen2.5:7b".to_string()
}

/// Environment variables read by the OpenAI backend, with the description
/// shown when one of the required ones is missing.
const OPENAI_REQUIRED_VARS: [(&str, &str); 3] = [
    ("OPENAI_API_KEY", "your API key"),
    ("OPENAI_API_BASE", "base URL of the API"),
    ("OPENAI_MODEL", "model name to use"),
];

/// Resolved configuration for the selected backend
#[derive(Debug, Clone)]
pub enum BackendConfig {
    OpenAi(OpenAiConfig),
    Ollama(OllamaConfig),
}

impl BackendConfig {
    /// Resolve the configuration for `kind` from the process environment.
    pub fn from_env(kind: BackendKind) -> Result<Self, AppError> {
        Self::from_env_with(kind, |name| env::var(name).ok())
    }

    /// Resolve the configuration for `kind` through an arbitrary lookup
    /// function. Tests use this to supply settings without mutating the
    /// process environment.
    pub fn from_env_with<F>(kind: BackendKind, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match kind {
            BackendKind::OpenAi => Ok(Self::OpenAi(Self::resolve_openai(lookup)?)),
            BackendKind::Ollama => Ok(Self::Ollama(Self::resolve_ollama(lookup))),
        }
    }

    /// The backend kind this configuration belongs to.
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::OpenAi(_) => BackendKind::OpenAi,
            Self::Ollama(_) => BackendKind::Ollama,
        }
    }

    fn resolve_openai<F>(lookup: F) -> Result<OpenAiConfig, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        for (name, description) in OPENAI_REQUIRED_VARS {
            match lookup(name) {
                Some(value) if !value.is_empty() => {}
                _ => missing.push(format!("- {}: {}", name, description)),
            }
        }

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "Missing required environment variables:\n{}",
                missing.join("\n")
            )));
        }

        let endpoint = lookup("OPENAI_API_BASE").unwrap_or_default();
        Url::parse(&endpoint).map_err(|e| {
            AppError::Config(format!("OPENAI_API_BASE is not a valid URL ({}): {}", endpoint, e))
        })?;

        let proxy = lookup("OPENAI_PROXY").filter(|p| !p.is_empty());
        if let Some(proxy_url) = &proxy {
            Url::parse(proxy_url).map_err(|e| {
                AppError::Config(format!("OPENAI_PROXY is not a valid URL ({}): {}", proxy_url, e))
            })?;
        }

        Ok(OpenAiConfig {
            api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            endpoint,
            model: lookup("OPENAI_MODEL").unwrap_or_default(),
            proxy,
        })
    }

    fn resolve_ollama<F>(lookup: F) -> OllamaConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = OllamaConfig::default();
        OllamaConfig {
            endpoint: lookup("OLLAMA_API_BASE")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.endpoint),
            model: lookup("OLLAMA_MODEL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.model),
        }
    }
}
