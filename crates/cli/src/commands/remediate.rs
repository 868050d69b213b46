//! Remediate command implementation.
//!
//! Failures are written next to the checkpoint file so they can be fed back
//! with `remediate --from`. A run with no failures, and any dry run, leaves
//! an earlier failure file untouched.

use std::path::Path;

use anyhow::{Context, Result};
use exemplar_migrate::{
    MigrateError, RemediationOptions, TracingObserver, failed_transactions_path,
    remediate_checkpoint, write_lines,
};
use grafana_client::GrafanaClient;
use tracing::{error, info, warn};

use crate::cancellation::CancellationToken;

/// Remediate the dashboards listed in `source`.
///
/// `checkpoint` only determines where the failure file goes.
pub async fn run(
    client: &GrafanaClient,
    source: &Path,
    checkpoint: &Path,
    dry_run: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let failures_path = failed_transactions_path(checkpoint);
    let observer = TracingObserver { dry_run };
    let options = RemediationOptions { dry_run };

    info!(path = %source.display(), dry_run, "Disabling exemplar queries");
    let outcome = cancel
        .run(remediate_checkpoint(client, source, options, &observer))
        .await?;

    let report = match outcome {
        Ok(report) => report,
        Err(e @ MigrateError::Aborted { .. }) => {
            record_failures(&failures_path, e.pending());
            return Err(e).context("Remediation stopped because Grafana rejected the API token");
        }
        Err(e) => return Err(e).context("Remediation failed"),
    };

    if dry_run {
        if !report.failed.is_empty() {
            warn!(failed = ?report.failed, "Dry run: failure file not written");
        }
    } else if !report.failed.is_empty() {
        record_failures(&failures_path, &report.failed);
    }

    info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        flipped = report.flipped,
        dry_run,
        "Remediation finished: {} succeeded, {} failed",
        report.succeeded.len(),
        report.failed.len()
    );

    Ok(())
}

/// Best-effort write of the failure file.
fn record_failures(path: &Path, uids: &[String]) {
    match write_lines(path, uids) {
        Ok(()) => warn!(
            path = %path.display(),
            count = uids.len(),
            "Wrote failed dashboards; retry with `remediate --from`"
        ),
        Err(e) => error!(path = %path.display(), error = %e, "Failed to write failure file"),
    }
}
