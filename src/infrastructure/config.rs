//! Application configuration

use std::env;
use std::fmt;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// API key for the chat-completion provider
    pub openai_api_key: String,
    /// Provider base URL (OpenAI-compatible, without the `/chat/completions` suffix)
    pub openai_base_url: String,
    /// Model used for every grooming request
    pub openai_model: String,
    /// Sampling temperature; low for stable output
    pub openai_temperature: f32,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .context("OPENAI_API_KEY environment variable is required")?,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4.1-mini".to_string()),
            openai_temperature: lookup("OPENAI_TEMPERATURE")
                .unwrap_or_else(|| "0.3".to_string())
                .parse()
                .context("OPENAI_TEMPERATURE must be a number")?,

            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("openai_temperature", &self.openai_temperature)
            .field("server_port", &self.server_port)
            .finish()
    }
}
