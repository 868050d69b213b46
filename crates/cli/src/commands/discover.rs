//! Discover command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use exemplar_migrate::{DiscoveryReport, TracingObserver, discover, write_lines};
use grafana_client::GrafanaClient;
use tracing::info;

use crate::args::SearchArgs;
use crate::cancellation::CancellationToken;

pub async fn run(
    client: &GrafanaClient,
    search: &SearchArgs,
    checkpoint: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let report = scan(client, search, cancel).await?;

    write_lines(checkpoint, &report.candidates).with_context(|| {
        format!(
            "Failed to write dashboard list to {}",
            checkpoint.display()
        )
    })?;
    info!(
        path = %checkpoint.display(),
        count = report.candidates.len(),
        "Wrote dashboard list"
    );

    Ok(())
}

/// Run discovery and log its summary.
pub(crate) async fn scan(
    client: &GrafanaClient,
    search: &SearchArgs,
    cancel: &CancellationToken,
) -> Result<DiscoveryReport> {
    let criteria = search.criteria();
    let observer = TracingObserver::default();

    info!("Getting list of dashboards from Grafana");
    let report = cancel
        .run(discover(client, Some(&criteria), &observer))
        .await?
        .context("Discovery failed")?;

    info!(
        scanned = report.scanned,
        candidates = report.candidates.len(),
        skipped = report.skipped.len(),
        "Found {} dashboards with exemplars enabled",
        report.candidates.len()
    );

    Ok(report)
}
