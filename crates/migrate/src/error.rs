//! Errors that stop a migration stage outright.
//!
//! Per-dashboard failures never show up here: they are absorbed into the
//! stage reports. Only conditions that make the rest of the stage pointless
//! escalate.

use grafana_client::ClientError;
use thiserror::Error;

use crate::checkpoint::CheckpointError;

#[derive(Error, Debug)]
pub enum MigrateError {
    /// The dashboard list could not be fetched, so there is nothing to scan.
    #[error("Failed to get dashboards list from Grafana: {0}")]
    Enumeration(#[source] ClientError),

    /// The credential was rejected mid-remediation; every later save would
    /// fail the same way.
    ///
    /// `pending` holds the UIDs that failed so far, the UID being processed,
    /// and every UID not yet attempted, in original order.
    #[error("Remediation aborted at dashboard {uid}: {source}")]
    Aborted {
        uid: String,
        #[source]
        source: ClientError,
        pending: Vec<String>,
    },

    /// The checkpoint handed to remediation could not be loaded.
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

impl MigrateError {
    /// The underlying client error, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Enumeration(source) | Self::Aborted { source, .. } => Some(source),
            Self::Checkpoint(_) => None,
        }
    }

    /// UIDs a later run should retry, when the stage stopped part way.
    pub fn pending(&self) -> &[String] {
        match self {
            Self::Aborted { pending, .. } => pending,
            _ => &[],
        }
    }
}
