//! Turns raw resume text into an [`ExtractedCandidateProfile`] via the AI service.
//!
//! Carried in `AppState` as `Arc<dyn ProfileExtractor>` so the upload handler
//! never depends on a concrete AI backend.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::OutputMode;
use crate::llm_client::{LlmClient, LlmError};
use crate::profile::models::{response_schema, ExtractedCandidateProfile};
use crate::profile::prompts::{
    profile_extract_system, PROFILE_EXTRACT_LEGACY_PROMPT, PROFILE_EXTRACT_PROMPT,
};

/// Only this many leading characters of a resume are sent to the AI service.
pub const MAX_DOCUMENT_CHARS: usize = 15_000;

/// Why enrichment was skipped for a document. Never fails a request.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("text extraction failed: {0}")]
    Text(String),

    #[error("document contains no extractable text")]
    EmptyText,

    #[error("AI call failed: {0}")]
    Llm(#[from] LlmError),
}

#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    async fn extract(&self, document_text: &str)
        -> Result<ExtractedCandidateProfile, ExtractionError>;
}

/// Gemini-backed extractor. Structured mode is the primary contract; legacy mode
/// sends the free-text prompt and relies on fence stripping.
pub struct GeminiProfileExtractor {
    llm: LlmClient,
    mode: OutputMode,
}

impl GeminiProfileExtractor {
    pub fn new(llm: LlmClient, mode: OutputMode) -> Self {
        Self { llm, mode }
    }
}

#[async_trait]
impl ProfileExtractor for GeminiProfileExtractor {
    async fn extract(
        &self,
        document_text: &str,
    ) -> Result<ExtractedCandidateProfile, ExtractionError> {
        if document_text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let text = truncate_document(document_text, MAX_DOCUMENT_CHARS);
        if text.len() < document_text.len() {
            debug!(
                "Resume text truncated to {} chars for extraction",
                MAX_DOCUMENT_CHARS
            );
        }

        let system = profile_extract_system();
        let profile: ExtractedCandidateProfile = match self.mode {
            OutputMode::Structured => {
                let prompt = PROFILE_EXTRACT_PROMPT.replace("{resume_text}", text);
                self.llm
                    .call_structured(&prompt, &system, &response_schema())
                    .await?
            }
            OutputMode::Legacy => {
                let prompt = PROFILE_EXTRACT_LEGACY_PROMPT.replace("{resume_text}", text);
                self.llm.call_json(&prompt, &system).await?
            }
        };

        Ok(profile)
    }
}

/// Keeps the first `max_chars` characters of `text`, cutting on a char boundary.
pub fn truncate_document(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
