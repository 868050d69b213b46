//! Dashboard search, fetch, and save endpoints.

use reqwest::Client;

use crate::endpoints::path::dashboard_uid_path;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{
    Dashboard, DashboardSearchHit, SaveDashboardRequest, SaveDashboardResponse, SearchCriteria,
};

/// Fetch one page of `GET /api/search`, restricted to dashboards.
///
/// `page` is 1-based, as Grafana expects.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    criteria: &SearchCriteria,
    limit: u64,
    page: u64,
    max_retries: usize,
) -> Result<Vec<DashboardSearchHit>> {
    let url = format!("{}/api/search", base_url);

    let mut query_params: Vec<(String, String)> = vec![("type".to_string(), "dash-db".to_string())];
    query_params.extend(criteria.to_query_params());
    query_params.push(("limit".to_string(), limit.to_string()));
    query_params.push(("page".to_string(), page.to_string()));

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&query_params);

    let response = send_request_with_retry(builder, max_retries, "/api/search", "GET").await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse search results: {}", e)))
}

/// Get a single dashboard (model and meta) by UID.
pub async fn get_dashboard_by_uid(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    uid: &str,
    max_retries: usize,
) -> Result<Dashboard> {
    let endpoint = dashboard_uid_path(uid);
    let url = format!("{}{}", base_url, endpoint);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));

    let response = send_request_with_retry(builder, max_retries, &endpoint, "GET").await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse dashboard {}: {}", uid, e)))
}

/// Create or update a dashboard via `POST /api/dashboards/db`.
pub async fn save_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    request: &SaveDashboardRequest,
    max_retries: usize,
) -> Result<SaveDashboardResponse> {
    let url = format!("{}/api/dashboards/db", base_url);

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(request);

    let response =
        send_request_with_retry(builder, max_retries, "/api/dashboards/db", "POST").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse save response: {}", e))
    })
}
