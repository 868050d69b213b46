//! The dashboard platform as seen by the migration.
//!
//! [`DashboardApi`] names the four calls the workflow needs. It is
//! implemented for [`GrafanaClient`]; tests implement it in memory.

use async_trait::async_trait;
use grafana_client::{
    Dashboard, DashboardSearchHit, GrafanaClient, Result, SaveDashboardRequest,
    SaveDashboardResponse, SearchCriteria,
};

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Enumerate every dashboard.
    async fn list_dashboards(&self) -> Result<Vec<DashboardSearchHit>>;

    /// Enumerate dashboards matching `criteria`.
    async fn search_dashboards(&self, criteria: &SearchCriteria)
    -> Result<Vec<DashboardSearchHit>>;

    /// Fetch one dashboard's definition and metadata.
    async fn get_dashboard_by_uid(&self, uid: &str) -> Result<Dashboard>;

    /// Persist a dashboard definition.
    async fn save_dashboard(&self, request: &SaveDashboardRequest)
    -> Result<SaveDashboardResponse>;
}

#[async_trait]
impl DashboardApi for GrafanaClient {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSearchHit>> {
        GrafanaClient::list_dashboards(self).await
    }

    async fn search_dashboards(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<DashboardSearchHit>> {
        GrafanaClient::search_dashboards(self, criteria).await
    }

    async fn get_dashboard_by_uid(&self, uid: &str) -> Result<Dashboard> {
        GrafanaClient::get_dashboard_by_uid(self, uid).await
    }

    async fn save_dashboard(
        &self,
        request: &SaveDashboardRequest,
    ) -> Result<SaveDashboardResponse> {
        GrafanaClient::save_dashboard(self, request).await
    }
}
