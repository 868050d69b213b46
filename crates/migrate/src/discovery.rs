//! Discovery: find dashboards with exemplar queries enabled.
//!
//! Invariants:
//! - Candidates keep enumeration order.
//! - A failed enumeration stops the stage; a failed fetch only skips that dashboard.
//! - Skipped dashboards are neither candidates nor remediation failures.

use grafana_client::SearchCriteria;
use grafana_config::constants::PROGRESS_REPORT_INTERVAL;

use crate::error::MigrateError;
use crate::exemplar::contains_enabled_exemplar;
use crate::observer::{FailedStep, MigrationObserver, Stage};
use crate::platform::DashboardApi;

/// Outcome of a discovery scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Number of dashboards enumerated.
    pub scanned: usize,
    /// UIDs of dashboards with at least one enabled exemplar.
    pub candidates: Vec<String>,
    /// UIDs whose definition could not be fetched.
    pub skipped: Vec<String>,
}

/// Scan dashboards for enabled exemplars.
///
/// With `criteria` that narrow the search, only matching dashboards are
/// scanned; otherwise every dashboard is.
///
/// # Errors
///
/// Returns [`MigrateError::Enumeration`] when the dashboard list itself
/// cannot be retrieved.
pub async fn discover<A>(
    api: &A,
    criteria: Option<&SearchCriteria>,
    observer: &dyn MigrationObserver,
) -> Result<DiscoveryReport, MigrateError>
where
    A: DashboardApi + ?Sized,
{
    let hits = match criteria.filter(|c| !c.is_empty()) {
        Some(criteria) => api.search_dashboards(criteria).await,
        None => api.list_dashboards().await,
    }
    .map_err(MigrateError::Enumeration)?;

    let total = hits.len();
    let mut report = DiscoveryReport {
        scanned: total,
        ..Default::default()
    };

    for (i, hit) in hits.into_iter().enumerate() {
        if i % PROGRESS_REPORT_INTERVAL == 0 {
            observer.progress(Stage::Discovery, i, total);
        }

        let dashboard = match api.get_dashboard_by_uid(&hit.uid).await {
            Ok(dashboard) => dashboard,
            Err(e) => {
                observer.failed(Stage::Discovery, &hit.uid, FailedStep::Fetch, &e);
                report.skipped.push(hit.uid);
                continue;
            }
        };
        observer.fetched(Stage::Discovery, &hit.uid, dashboard.slug());

        if contains_enabled_exemplar(&dashboard.model) {
            observer.matched(&hit.uid, dashboard.slug());
            report.candidates.push(hit.uid);
        }
    }

    Ok(report)
}
