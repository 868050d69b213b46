//! Centralized constants for the exemplar migration workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default number of automatic low-level retries per request.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for the configurable retry count.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Dashboard API Defaults
// =============================================================================

/// Page size used when enumerating every dashboard through the search API.
pub const DEFAULT_SEARCH_PAGE_SIZE: u64 = 1000;

// =============================================================================
// Checkpoint Defaults
// =============================================================================

/// Default checkpoint file holding UIDs of dashboards with exemplars enabled.
pub const DEFAULT_CHECKPOINT_FILE: &str = "exemplar-dashboards";

/// Suffix appended to the checkpoint file name for failed remediation UIDs.
pub const FAILED_TRANSACTIONS_SUFFIX: &str = "-failed-transactions";

/// Number of processed items between progress reports.
pub const PROGRESS_REPORT_INTERVAL: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "GRAFANA_URL";
pub const ENV_API_TOKEN: &str = "GRAFANA_API_TOKEN";
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "GRAFANA_MAX_RETRIES";
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";
