//! Data models for Grafana API requests and responses.

pub mod dashboards;

pub use dashboards::{
    Dashboard, DashboardMeta, DashboardSearchHit, GrafanaErrorBody, SaveDashboardRequest,
    SaveDashboardResponse, SearchCriteria,
};
