//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply their values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_SKIP_VERIFY, ENV_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse `var` when set; `expected` describes the accepted form in the error.
fn parse_env<T: FromStr>(var: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: format!("must be {}", expected),
            })
        })
        .transpose()
}

/// Layer the `GRAFANA_*` variables onto `loader` through its `with_*` setters.
pub fn apply_env(mut loader: ConfigLoader) -> Result<ConfigLoader, ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader = loader.with_base_url(url);
    }
    if let Some(token) = env_var_or_none(ENV_API_TOKEN) {
        loader = loader.with_api_token(token);
    }
    if let Some(skip) = parse_env::<bool>(ENV_SKIP_VERIFY, "true or false")? {
        loader = loader.with_skip_verify(skip);
    }
    if let Some(secs) = parse_env::<u64>(ENV_TIMEOUT, "a number")? {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = parse_env::<usize>(ENV_MAX_RETRIES, "a non-negative integer")? {
        loader = loader.with_max_retries(retries);
    }
    Ok(loader)
}

/// `.env` loading is skipped when `DOTENV_DISABLED` is `1` or `true`.
pub(crate) fn dotenv_enabled() -> bool {
    !matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("1") | Some("true")
    )
}
