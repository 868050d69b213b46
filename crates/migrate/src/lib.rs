//! Discover and disable exemplar queries across a Grafana dashboard fleet.
//!
//! The workflow runs in two phases joined by a checkpoint file:
//!
//! 1. [`discovery::discover`] scans dashboards and returns the UIDs whose
//!    definitions contain `"exemplar": true`.
//! 2. [`checkpoint`] persists that list (and, later, the failures) as
//!    newline-delimited text so each phase can be re-run on its own.
//! 3. [`remediation::remediate`] fetches each checkpointed dashboard, flips
//!    every enabled exemplar to `false`, and saves it back with overwrite.
//!
//! Every platform call goes through the [`DashboardApi`] trait and every
//! outcome is reported to a [`MigrationObserver`], so the workflow can be
//! driven against an in-memory fake in tests.

pub mod checkpoint;
pub mod discovery;
pub mod error;
pub mod exemplar;
pub mod observer;
pub mod platform;
pub mod remediation;

pub use checkpoint::{
    CheckpointError, failed_transactions_path, is_storable_identifier, read_lines, write_lines,
};
pub use discovery::{DiscoveryReport, discover};
pub use error::MigrateError;
pub use observer::{FailedStep, MigrationObserver, Stage, TracingObserver};
pub use platform::DashboardApi;
pub use remediation::{RemediationOptions, RemediationReport, remediate, remediate_checkpoint};
