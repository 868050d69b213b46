//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - `build()` performs no I/O; a missing URL or token fails before any network activity.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::{apply_env, dotenv_enabled};
use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load variables from a `.env` file in the working directory, if any.
    ///
    /// Existing process variables win over `.env` entries. Skipped entirely
    /// when `DOTENV_DISABLED` is set.
    ///
    /// # Errors
    ///
    /// A present but unreadable or malformed `.env` file is an error; a
    /// missing one is not. Errors never include file contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if !dotenv_enabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(self),
            Err(dotenvy::Error::Io(e)) => Err(ConfigError::DotenvIo { kind: e.kind() }),
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                Err(ConfigError::DotenvParse { error_index })
            }
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Layer `GRAFANA_*` environment variables over the current values.
    pub fn from_env(self) -> Result<Self, ConfigError> {
        apply_env(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingBaseUrl`] / [`ConfigError::MissingApiToken`] when a
    ///   required value was never provided (blank values count as missing).
    /// - [`ConfigError::InvalidValue`] when the URL is not an absolute http(s) URL.
    /// - [`ConfigError::InvalidTimeout`] / [`ConfigError::InvalidMaxRetries`] when
    ///   a value is out of bounds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let api_token = self
            .api_token
            .filter(|token| !token.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingApiToken)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if !(1..=MAX_TIMEOUT_SECS).contains(&timeout.as_secs()) {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_TIMEOUT_SECS,
                    timeout.as_secs()
                ),
            });
        }

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, max_retries),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
                max_retries,
            },
            api_token,
        })
    }
}

/// Validate that the base URL is an absolute http(s) URL with a host, and
/// strip any trailing slash.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://grafana.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://grafana.example.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: "host is required (e.g. https://grafana.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
