//! REST API endpoint implementations.
//!
//! Each function performs one HTTP call with the shared retry policy; the
//! [`crate::GrafanaClient`] methods wrap them with the client's state.

mod dashboards;
pub mod path;
mod request;

pub use dashboards::{get_dashboard_by_uid, save_dashboard, search_dashboards};
pub use request::send_request_with_retry;
