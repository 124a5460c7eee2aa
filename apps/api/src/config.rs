use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default or is optional; the service starts bare.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, accepted leads are forwarded to this URL instead of only
    /// being logged.
    pub lead_webhook_url: Option<String>,
    /// Directory holding the built site bundle. When unset the service is
    /// API-only.
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            lead_webhook_url: optional_env("LEAD_WEBHOOK_URL"),
            static_dir: optional_env("STATIC_DIR"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
