//! Grafana HTTP API client.
//!
//! This crate provides a type-safe async client for the subset of the
//! Grafana HTTP API used to audit and rewrite dashboards: dashboard search,
//! fetch by UID, and save with overwrite.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Dashboard, DashboardMeta, DashboardSearchHit, SaveDashboardRequest, SaveDashboardResponse,
    SearchCriteria,
};
