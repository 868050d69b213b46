//! Observability seam for the migration stages.
//!
//! Discovery and remediation never log directly; they report what happened
//! to a [`MigrationObserver`]. The binary plugs in [`TracingObserver`],
//! tests plug in a recorder.

use std::fmt;

use grafana_client::{ClientError, SaveDashboardResponse};
use tracing::{error, info, warn};

/// Which stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Discovery,
    Remediation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Discovery => write!(f, "discovery"),
            Stage::Remediation => write!(f, "remediation"),
        }
    }
}

/// The per-dashboard step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStep {
    Fetch,
    Save,
}

impl fmt::Display for FailedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailedStep::Fetch => write!(f, "fetch"),
            FailedStep::Save => write!(f, "save"),
        }
    }
}

/// Receives progress and per-dashboard outcomes from the migration stages.
pub trait MigrationObserver: Send + Sync {
    /// `processed` of `total` items are done. Emitted every few items.
    fn progress(&self, stage: Stage, processed: usize, total: usize);

    /// A dashboard definition was retrieved.
    fn fetched(&self, stage: Stage, uid: &str, slug: &str);

    /// Discovery found an enabled exemplar in this dashboard.
    fn matched(&self, uid: &str, slug: &str);

    /// Remediation rewrote `flipped` occurrences in this dashboard.
    fn rewritten(&self, uid: &str, slug: &str, flipped: usize);

    /// Remediation saved this dashboard.
    fn saved(&self, uid: &str, response: &SaveDashboardResponse);

    /// A per-dashboard step failed; the stage carries on.
    fn failed(&self, stage: Stage, uid: &str, step: FailedStep, error: &ClientError);
}

/// Renders every event as a structured `tracing` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver {
    /// Set when remediation runs without saving.
    pub dry_run: bool,
}

impl MigrationObserver for TracingObserver {
    fn progress(&self, stage: Stage, processed: usize, total: usize) {
        info!(%stage, processed, total, "Processed {} / {} dashboards", processed, total);
    }

    fn fetched(&self, stage: Stage, uid: &str, slug: &str) {
        info!(%stage, uid, slug, "Successfully retrieved dashboard from Grafana");
    }

    fn matched(&self, uid: &str, slug: &str) {
        info!(uid, slug, "Found dashboard with exemplars");
    }

    fn rewritten(&self, uid: &str, slug: &str, flipped: usize) {
        if self.dry_run {
            info!(uid, slug, flipped, "Dry run: would disable exemplar queries");
        } else if flipped == 0 {
            warn!(uid, slug, "No enabled exemplar queries left; saving unchanged definition");
        } else {
            info!(uid, slug, flipped, "Disabled exemplar queries");
        }
    }

    fn saved(&self, uid: &str, response: &SaveDashboardResponse) {
        info!(
            uid,
            status = %response.status,
            version = response.version,
            url = %response.url,
            "Dashboard saved"
        );
    }

    fn failed(&self, stage: Stage, uid: &str, step: FailedStep, error: &ClientError) {
        error!(%stage, uid, %step, error = %error, "Failed to {} dashboard", step);
    }
}
