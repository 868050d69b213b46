//! Full pipeline: discover, checkpoint, remediate.
//!
//! The checkpoint is written best-effort and then read back, so remediation
//! always works from what is on disk. A read-back failure is fatal.

use std::path::Path;

use anyhow::Result;
use exemplar_migrate::write_lines;
use grafana_client::GrafanaClient;
use tracing::{error, info};

use crate::args::SearchArgs;
use crate::cancellation::CancellationToken;
use crate::commands::{discover, remediate};

pub async fn run(
    client: &GrafanaClient,
    search: &SearchArgs,
    checkpoint: &Path,
    dry_run: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let report = discover::scan(client, search, cancel).await?;

    match write_lines(checkpoint, &report.candidates) {
        Ok(()) => info!(
            path = %checkpoint.display(),
            count = report.candidates.len(),
            "Wrote dashboard list"
        ),
        Err(e) => error!(
            path = %checkpoint.display(),
            error = %e,
            "Failed to write dashboard list"
        ),
    }

    remediate::run(client, checkpoint, checkpoint, dry_run, cancel).await
}
