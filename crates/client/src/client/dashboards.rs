//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Enumerating dashboards across every search page
//! - Fetching a dashboard by UID
//! - Saving a dashboard
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    Dashboard, DashboardSearchHit, SaveDashboardRequest, SaveDashboardResponse, SearchCriteria,
};

impl GrafanaClient {
    /// List every dashboard the token can see, in search order.
    pub async fn list_dashboards(&self) -> Result<Vec<DashboardSearchHit>> {
        self.search_dashboards(&SearchCriteria::default()).await
    }

    /// List every dashboard matching `criteria`, following pagination until a
    /// short page is returned.
    pub async fn search_dashboards(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<DashboardSearchHit>> {
        let mut hits = Vec::new();
        let mut page = 1;

        loop {
            let batch = endpoints::search_dashboards(
                &self.http,
                &self.base_url,
                self.token(),
                criteria,
                self.page_size,
                page,
                self.max_retries,
            )
            .await?;

            let short_page = (batch.len() as u64) < self.page_size;
            debug!(page, returned = batch.len(), "Fetched dashboard search page");
            hits.extend(batch);

            if short_page {
                return Ok(hits);
            }
            page += 1;
        }
    }

    /// Get a dashboard by UID.
    pub async fn get_dashboard_by_uid(&self, uid: &str) -> Result<Dashboard> {
        endpoints::get_dashboard_by_uid(
            &self.http,
            &self.base_url,
            self.token(),
            uid,
            self.max_retries,
        )
        .await
    }

    /// Save a dashboard.
    pub async fn save_dashboard(
        &self,
        request: &SaveDashboardRequest,
    ) -> Result<SaveDashboardResponse> {
        endpoints::save_dashboard(
            &self.http,
            &self.base_url,
            self.token(),
            request,
            self.max_retries,
        )
        .await
    }
}
