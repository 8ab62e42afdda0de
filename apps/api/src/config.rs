use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// How the AI service is asked to answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Schema-constrained JSON output.
    #[default]
    Structured,
    /// Free-text prompt; the reply may come wrapped in markdown fences.
    Legacy,
}

impl FromStr for OutputMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(OutputMode::Structured),
            "legacy" => Ok(OutputMode::Legacy),
            other => bail!("AI_OUTPUT_MODE must be 'structured' or 'legacy', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub ai_timeout: Duration,
    pub max_upload_bytes: usize,
    pub output_mode: OutputMode,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let ai_timeout_secs = parse_or(&lookup, "AI_TIMEOUT_SECS", 60u64)?;
        let max_upload_mb = parse_or(&lookup, "MAX_UPLOAD_MB", 10usize)?;
        let output_mode = parse_or(&lookup, "AI_OUTPUT_MODE", OutputMode::default())?;
        let max_upload_bytes = max_upload_mb
            .checked_mul(1024 * 1024)
            .with_context(|| format!("MAX_UPLOAD_MB is too large: {max_upload_mb}"))?;

        Ok(Config {
            gemini_api_key,
            port,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            max_upload_bytes,
            output_mode,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{key} has an invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}
