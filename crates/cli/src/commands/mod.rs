//! CLI command implementations.

pub mod discover;
pub mod remediate;
pub mod run;

use anyhow::{Context, Result};
use grafana_client::GrafanaClient;
use grafana_config::Config;

/// Build the Grafana client shared by every command.
pub fn build_client_from_config(config: &Config) -> Result<GrafanaClient> {
    GrafanaClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Grafana client")
}
