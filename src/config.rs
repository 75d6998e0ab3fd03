// src/config.rs
use crate::errors::{Result, SolveError};

pub const DEFAULT_API_BASE: &str = "https://api.mistral.ai";
pub const DEFAULT_MODEL: &str = "pixtral-12b-2409";
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 8 * 1024 * 1024;

/// Configuration for the Mistral provider.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    pub api_base: String,
    /// `None` when `MISTRAL_API_KEY` is unset; the provider then reports itself unavailable.
    pub api_key: Option<String>,
    pub model: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mistral: MistralConfig,
    pub secret_key: Option<String>,
    pub host: String,
    pub port: u16,
    /// Hard ceiling on a request body, enforced before validation.
    pub max_request_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mistral: MistralConfig {
                api_base: DEFAULT_API_BASE.to_string(),
                api_key: None,
                model: DEFAULT_MODEL.to_string(),
            },
            secret_key: None,
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mistral = MistralConfig {
            api_base: non_empty("MISTRAL_API_BASE").unwrap_or(defaults.mistral.api_base),
            api_key: non_empty("MISTRAL_API_KEY"),
            model: non_empty("MISTRAL_MODEL").unwrap_or(defaults.mistral.model),
        };

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SolveError::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let max_request_bytes = match non_empty("MAX_REQUEST_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                SolveError::Config(format!("MAX_REQUEST_BYTES must be a byte count, got '{}'", raw))
            })?,
            None => defaults.max_request_bytes,
        };

        Ok(AppConfig {
            mistral,
            secret_key: non_empty("SECRET_KEY"),
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            max_request_bytes,
        })
    }
}
