/*!
 * AI-powered translation pipeline.
 *
 * Sequences text extraction, chunking, prompt construction, retry-wrapped
 * backend invocation and result concatenation for one document at a time.
 */

pub mod core;

pub use core::TranslationService;
