use std::env;

use thiserror::Error;

/// Model queried when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Gemini v1beta REST API base used when `GEMINI_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; an absent or empty value is a startup
    /// error. Everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnvVar("GEMINI_API_KEY"))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_base = env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            port,
            api_key,
            model,
            api_base,
        })
    }
}
