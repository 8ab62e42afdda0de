use std::sync::Arc;

use crate::config::Config;
use crate::profile::extractor::ProfileExtractor;
use crate::profile::text::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI Field Extractor. Default: `GeminiProfileExtractor`.
    pub profiles: Arc<dyn ProfileExtractor>,
    /// Document text extraction. Default: `PdfTextExtractor`.
    pub text: Arc<dyn TextExtractor>,
}
