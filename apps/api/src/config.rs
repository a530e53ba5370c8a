use std::fmt;

use anyhow::{Context, Result};

/// Application configuration loaded once at startup from environment variables.
///
/// The DeepSeek credential is intentionally optional here: a missing key must
/// not stop the process, it only degrades `/api/improve-resume` to 503 while
/// `/api/health` keeps reporting the missing capability.
#[derive(Clone)]
pub struct Config {
    pub deepseek_api_key: Option<String>,
    /// Origins allowed to call the API (CORS allow-list).
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            deepseek_api_key: optional_env("DEEPSEEK_API_KEY"),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }
}

// Manual Debug so the credential never ends up in log output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "deepseek_api_key",
                &self.deepseek_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("allowed_origins", &self.allowed_origins)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("environment", &self.environment)
            .finish()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
