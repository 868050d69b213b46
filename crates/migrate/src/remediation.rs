//! Remediation: disable exemplars in checkpointed dashboards and save them.
//!
//! Invariants:
//! - Only UIDs passed in are ever saved; matching is not re-run to decide.
//! - Each UID ends up in exactly one of `succeeded` or `failed`.
//! - Per-dashboard failures never stop the loop. A rejected credential does,
//!   because every later call would be rejected too.

use std::path::Path;

use grafana_client::{ClientError, SaveDashboardRequest};
use grafana_config::constants::PROGRESS_REPORT_INTERVAL;

use crate::checkpoint::read_lines;
use crate::error::MigrateError;
use crate::exemplar::disable_exemplars;
use crate::observer::{FailedStep, MigrationObserver, Stage};
use crate::platform::DashboardApi;

/// Version history message attached to every save.
pub const SAVE_MESSAGE: &str = "Disable exemplar queries";

#[derive(Debug, Clone, Copy, Default)]
pub struct RemediationOptions {
    /// Fetch and rewrite, but never save.
    pub dry_run: bool,
}

/// Outcome of a remediation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemediationReport {
    /// UIDs saved (or, in dry-run mode, rewritten) without error.
    pub succeeded: Vec<String>,
    /// UIDs whose fetch or save failed, in processing order.
    pub failed: Vec<String>,
    /// Total exemplar occurrences flipped across succeeded dashboards.
    pub flipped: usize,
}

/// Disable exemplar queries in each dashboard of `uids`, in order.
///
/// # Errors
///
/// Returns [`MigrateError::Aborted`] when Grafana rejects the credential.
/// Its `pending` list is what a later run should retry.
pub async fn remediate<A>(
    api: &A,
    uids: &[String],
    options: RemediationOptions,
    observer: &dyn MigrationObserver,
) -> Result<RemediationReport, MigrateError>
where
    A: DashboardApi + ?Sized,
{
    let total = uids.len();
    let mut report = RemediationReport::default();

    for (i, uid) in uids.iter().enumerate() {
        if i % PROGRESS_REPORT_INTERVAL == 0 {
            observer.progress(Stage::Remediation, i, total);
        }

        let mut dashboard = match api.get_dashboard_by_uid(uid).await {
            Ok(dashboard) => dashboard,
            Err(e) => {
                observer.failed(Stage::Remediation, uid, FailedStep::Fetch, &e);
                if e.is_auth_error() {
                    return Err(abort(report, uids, i, e));
                }
                report.failed.push(uid.clone());
                continue;
            }
        };
        observer.fetched(Stage::Remediation, uid, dashboard.slug());

        let flipped = disable_exemplars(&mut dashboard.model);
        observer.rewritten(uid, dashboard.slug(), flipped);

        if options.dry_run {
            report.flipped += flipped;
            report.succeeded.push(uid.clone());
            continue;
        }

        let request = SaveDashboardRequest::overwrite(dashboard).with_message(SAVE_MESSAGE);
        match api.save_dashboard(&request).await {
            Ok(response) => {
                observer.saved(uid, &response);
                report.flipped += flipped;
                report.succeeded.push(uid.clone());
            }
            Err(e) => {
                observer.failed(Stage::Remediation, uid, FailedStep::Save, &e);
                if e.is_auth_error() {
                    return Err(abort(report, uids, i, e));
                }
                report.failed.push(uid.clone());
            }
        }
    }

    Ok(report)
}

/// Load the UID list at `path` and remediate it.
///
/// # Errors
///
/// Returns [`MigrateError::Checkpoint`] when the file cannot be read, before
/// any dashboard is touched. Otherwise as [`remediate`].
pub async fn remediate_checkpoint<A>(
    api: &A,
    path: &Path,
    options: RemediationOptions,
    observer: &dyn MigrationObserver,
) -> Result<RemediationReport, MigrateError>
where
    A: DashboardApi + ?Sized,
{
    let uids = read_lines(path)?;
    remediate(api, &uids, options, observer).await
}

fn abort(
    report: RemediationReport,
    uids: &[String],
    index: usize,
    source: ClientError,
) -> MigrateError {
    let mut pending = report.failed;
    pending.extend(uids[index..].iter().cloned());
    MigrateError::Aborted {
        uid: uids[index].clone(),
        source,
        pending,
    }
}
