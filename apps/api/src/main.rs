mod config;
mod errors;
mod llm_client;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profile::extractor::GeminiProfileExtractor;
use crate::profile::text::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.ai_timeout)?;
    info!(
        "LLM client initialized (model: {}, mode: {:?}, timeout: {}s)",
        llm_client::MODEL,
        config.output_mode,
        config.ai_timeout.as_secs()
    );

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Uploads stored in {}", config.upload_dir.display());

    let state = AppState {
        profiles: Arc::new(GeminiProfileExtractor::new(llm, config.output_mode)),
        text: Arc::new(PdfTextExtractor),
        config: config.clone(),
    };

    // The upload form is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
