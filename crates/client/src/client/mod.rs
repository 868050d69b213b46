//! Main Grafana HTTP API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard search, fetch, and save methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Every request carries `Authorization: Bearer <token>`.
//! - Calls are awaited one at a time; the client never fans out.

pub mod builder;
mod dashboards;

use secrecy::{ExposeSecret, SecretString};

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .api_token(SecretString::new("glsa_...".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) max_retries: usize,
    pub(crate) page_size: u64,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of automatic retries per request.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }
}
