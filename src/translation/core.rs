/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which turns one
 * source document into translated text: extract, chunk, then one prompt
 * round-trip per chunk with the results concatenated strictly in chunk
 * order. Each backend call goes through the retry policy, and every chunk
 * leaves a before/after record in the run log.
 */

use std::path::Path;

use log::info;

use crate::chunker::split_by_line;
use crate::document_processor::extract_text;
use crate::errors::AppError;
use crate::providers::{BackendClient, ChatProvider};
use crate::retry::RetryPolicy;

/// Delimiter markers bracketing the per-chunk log records
const LOG_SOURCE_BEGIN: &str = "-------------本批次翻译原文开始-------------------";
const LOG_SOURCE_END: &str = "-------------本批次翻译原文结束-------------------";
const LOG_RESULT_BEGIN: &str = "-------------本批次翻译译文开始-------------------";
const LOG_RESULT_END: &str = "-------------本批次翻译译文结束-------------------";

/// Wrap one chunk in the fixed instruction template sent to the backend.
fn build_prompt(chunk: &str) -> String {
    format!(
        "<任务> 您是一名精通简体中文的专业译者，你在文稿翻译方面有着非凡的能力。请协助我把英文内容翻译成简体中文。\n\
         <注意>\n\
         请根据英文内容进行翻译，维持原有的格式，不省略任何信息。你只负责返回翻译，不要回答或解释任何情况。\n\
         对下面要翻译的内容进行翻译\n\
         <翻译内容>\n\
         {}",
        chunk
    )
}

/// Translation service for one selected backend
pub struct TranslationService {
    /// The backend all chunk requests go to
    backend: BackendClient,
    /// Retry policy wrapped around every backend call
    retry: RetryPolicy,
}

impl TranslationService {
    /// Create a service with the default retry policy.
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The backend this service translates through.
    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Translate a single chunk of text through the backend.
    ///
    /// The chunk is embedded verbatim in the instruction template; the
    /// backend's default model is used. Fails only after the retry policy
    /// is exhausted.
    pub async fn translate_text(&self, text: &str) -> Result<String, AppError> {
        let prompt = build_prompt(text);
        let translated = self
            .retry
            .run("translation request", || self.backend.chat(&prompt, None))
            .await?;
        Ok(translated)
    }

    /// Translate a whole document file and return the reassembled text.
    pub async fn translate_file<P: AsRef<Path>>(
        &self,
        path: P,
        max_chunk_size: usize,
    ) -> Result<String, AppError> {
        self.translate_file_with(path, max_chunk_size, |_, _| {}).await
    }

    /// Translate a whole document file, reporting per-chunk progress.
    ///
    /// `on_chunk` is called after each chunk completes with
    /// `(chunks_done, chunks_total)`.
    pub async fn translate_file_with<P, F>(
        &self,
        path: P,
        max_chunk_size: usize,
        mut on_chunk: F,
    ) -> Result<String, AppError>
    where
        P: AsRef<Path>,
        F: FnMut(u64, u64),
    {
        let path = path.as_ref();
        let text = extract_text(path)?;
        let chunks = split_by_line(&text, max_chunk_size);
        let total = chunks.len() as u64;

        info!(
            "Translating {} in {} chunk(s) via {}",
            path.display(),
            total,
            self.backend.kind().display_name()
        );

        let mut translated = String::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let label = format!("chunk {}/{}", index + 1, total);
            let prompt = build_prompt(chunk);
            let chunk_translation = self
                .retry
                .run(&label, || self.backend.chat(&prompt, None))
                .await?;

            info!("{}", LOG_SOURCE_BEGIN);
            info!("{}", chunk);
            info!("{}", LOG_SOURCE_END);
            info!("{}", LOG_RESULT_BEGIN);
            info!("{}", chunk_translation);
            info!("{}", LOG_RESULT_END);

            // No separator between chunk results; each backend's own
            // trailing-whitespace behavior is the only separation.
            translated.push_str(&chunk_translation);
            on_chunk(index as u64 + 1, total);
        }

        Ok(translated)
    }
}
