//! Configuration types for a Grafana connection.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection and credential.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API token is always wrapped in `SecretString` and never printed by `Debug`.
//! - `base_url` is stored without a trailing slash.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};

/// Connection configuration for a Grafana instance.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana instance (e.g., https://grafana.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// Automatic low-level retries per request
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// API token (service account token or legacy API key)
    pub api_token: SecretString,
}

impl Config {
    /// Create a new config with the specified base URL and API token,
    /// using defaults for everything else.
    pub fn with_api_token(base_url: String, api_token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                max_retries: DEFAULT_MAX_RETRIES,
            },
            api_token,
        }
    }
}
