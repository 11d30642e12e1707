use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_PERSONA_PATH: &str = "persona_data.json";

/// Application configuration loaded from environment variables.
/// Fails at startup if the completion API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    /// The single origin allowed to call `/api/*` cross-origin.
    pub frontend_url: String,
    pub persona_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            persona_path: std::env::var("PERSONA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PERSONA_PATH)),
            port: parse_port(&std::env::var("PORT").unwrap_or_else(|_| "5000".to_string()))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>()
        .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))
}
