//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and handed to the
//! services as an immutable value. Nothing reads the environment afterwards.
//!
//! ## Variables
//!
//! ```bash
//! export API_BASE="http://backend:8081"
//! export LISTEN="0.0.0.0:5000"
//! export BACKEND_TIMEOUT_MS="10000"
//! export POSTAL_TIMEOUT_MS="2000"
//! export POSTAL_PRIMARY_URL="http://cep.la/{code}"
//! export POSTAL_FALLBACK_URL="https://viacep.com.br/ws/{code}/json/"
//! ```
//!
//! All variables are optional:
//!
//! - `API_BASE` - Backend base URL (default: `http://backend:8081`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BACKEND_TIMEOUT_MS` - Timeout for each backend request (default: 10000)
//! - `POSTAL_TIMEOUT_MS` - Timeout for each postal provider request (default: 2000)
//! - `POSTAL_PRIMARY_URL` - Primary provider URL template, must contain `{code}`
//! - `POSTAL_FALLBACK_URL` - Fallback provider URL template, must contain `{code}`

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::http::CODE_PLACEHOLDER;

pub const DEFAULT_API_BASE: &str = "http://backend:8081";
pub const DEFAULT_POSTAL_PRIMARY_URL: &str = "http://cep.la/{code}";
pub const DEFAULT_POSTAL_FALLBACK_URL: &str = "https://viacep.com.br/ws/{code}/json/";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API.
    pub api_base: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Per-request timeout for backend calls, in milliseconds.
    pub backend_timeout_ms: u64,
    /// Per-request timeout for each postal provider, in milliseconds.
    pub postal_timeout_ms: u64,
    pub postal_primary_url: String,
    pub postal_fallback_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let api_base = env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let backend_timeout_ms = parse_var("BACKEND_TIMEOUT_MS", 10_000)?;
        let postal_timeout_ms = parse_var("POSTAL_TIMEOUT_MS", 2_000)?;

        let postal_primary_url = env::var("POSTAL_PRIMARY_URL")
            .unwrap_or_else(|_| DEFAULT_POSTAL_PRIMARY_URL.to_string());
        let postal_fallback_url = env::var("POSTAL_FALLBACK_URL")
            .unwrap_or_else(|_| DEFAULT_POSTAL_FALLBACK_URL.to_string());

        Ok(Self {
            api_base,
            listen_addr,
            log_level,
            log_format,
            backend_timeout_ms,
            postal_timeout_ms,
            postal_primary_url,
            postal_fallback_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base` is not an absolute HTTP(S) URL
    /// - a postal URL template is not HTTP(S) or lacks `{code}`
    /// - a timeout is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    pub fn validate(&self) -> Result<()> {
        self.backend_url()?;

        for (name, template) in [
            ("POSTAL_PRIMARY_URL", &self.postal_primary_url),
            ("POSTAL_FALLBACK_URL", &self.postal_fallback_url),
        ] {
            if !template.contains(CODE_PLACEHOLDER) {
                anyhow::bail!("{name} must contain '{CODE_PLACEHOLDER}', got '{template}'");
            }
            parse_http_url(name, &template.replace(CODE_PLACEHOLDER, "00000000"))?;
        }

        if self.backend_timeout_ms == 0 {
            anyhow::bail!("BACKEND_TIMEOUT_MS must be greater than 0");
        }
        if self.postal_timeout_ms == 0 {
            anyhow::bail!("POSTAL_TIMEOUT_MS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Parsed backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not an absolute HTTP(S) URL.
    pub fn backend_url(&self) -> Result<Url> {
        parse_http_url("API_BASE", &self.api_base)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_millis(self.backend_timeout_ms)
    }

    pub fn postal_timeout(&self) -> Duration {
        Duration::from_millis(self.postal_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend: {}", self.api_base);
        tracing::info!("  Backend timeout: {}ms", self.backend_timeout_ms);
        tracing::info!("  Postal primary: {}", self.postal_primary_url);
        tracing::info!("  Postal fallback: {}", self.postal_fallback_url);
        tracing::info!("  Postal timeout: {}ms", self.postal_timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

fn parse_http_url(name: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("{name} is not a valid URL: '{raw}'"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must start with 'http://' or 'https://', got '{raw}'");
    }
    Ok(url)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
