/*!
 * # doctran - AI-powered document translation
 *
 * A Rust library for translating English documents into Simplified Chinese
 * using LLM chat-completion services.
 *
 * ## Features
 *
 * - Extract text from plain-text and Word (.docx) documents
 * - Split long documents into model-sized chunks without breaking lines
 * - Translate chunks through interchangeable backends:
 *   - OpenAI-compatible hosted APIs
 *   - Ollama (local LLM)
 * - Bounded exponential-backoff retry around every backend call
 * - Per-run log files pairing original and translated text for each chunk
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Backend selection and environment-driven configuration
 * - `chunker`: Line-preserving document chunking
 * - `document_processor`: Text extraction from source files
 * - `retry`: Retry policy and backoff combinator
 * - `providers`: Client implementations for chat-completion backends:
 *   - `providers::openai`: OpenAI-compatible API client
 *   - `providers::ollama`: Ollama API client
 * - `translation`: The per-document translation pipeline
 * - `file_utils`: File system operations and output naming
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod chunker;
pub mod document_processor;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod retry;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{BackendConfig, BackendKind, OllamaConfig, OpenAiConfig};
pub use chunker::split_by_line;
pub use errors::{AppError, ProviderError};
pub use retry::RetryPolicy;
pub use translation::TranslationService;
