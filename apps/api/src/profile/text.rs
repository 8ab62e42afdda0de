use async_trait::async_trait;
use bytes::Bytes;

use crate::profile::extractor::ExtractionError;

/// Pulls plain text out of an uploaded document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// PDF text extraction via `pdf-extract`, run on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, ExtractionError> {
        // pdf-extract can panic on malformed input; the join error catches that.
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| ExtractionError::Text(format!("PDF parser aborted: {e}")))?
            .map_err(|e| ExtractionError::Text(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_a_text_error() {
        let result = PdfTextExtractor
            .extract_text(Bytes::from_static(b"definitely not a pdf"))
            .await;
        assert!(matches!(result, Err(ExtractionError::Text(_))));
    }
}
