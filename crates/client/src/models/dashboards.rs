//! Dashboard models for the Grafana dashboard and search APIs.
//!
//! The dashboard definition itself is kept as a raw JSON object: only the
//! fields the migration needs (`uid`, `title`) are read out of it, and the
//! rest is passed back to Grafana untouched on save.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of `GET /api/search`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSearchHit {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    pub folder_uid: Option<String>,
    pub folder_title: Option<String>,
}

/// Filters for `GET /api/search`.
///
/// An empty criteria value matches every dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Free-text title query.
    pub query: Option<String>,
    /// Dashboards must carry all of these tags.
    pub tags: Vec<String>,
    /// Restrict to these folders.
    pub folder_uids: Vec<String>,
}

impl SearchCriteria {
    /// Whether the criteria narrow the search at all.
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.tags.is_empty() && self.folder_uids.is_empty()
    }

    /// Render as query parameters (without paging or type filter).
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.query {
            params.push(("query".to_string(), q.clone()));
        }
        for tag in &self.tags {
            params.push(("tag".to_string(), tag.clone()));
        }
        for folder_uid in &self.folder_uids {
            params.push(("folderUIDs".to_string(), folder_uid.clone()));
        }
        params
    }
}

/// Dashboard metadata returned alongside the model.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMeta {
    pub slug: String,
    pub url: String,
    pub folder_id: i64,
    pub folder_uid: String,
    pub folder_title: String,
    pub version: i64,
    pub provisioned: bool,
    pub can_save: bool,
}

/// Response of `GET /api/dashboards/uid/{uid}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Dashboard {
    /// The dashboard definition: panels, targets, templating, etc.
    #[serde(rename = "dashboard")]
    pub model: Map<String, Value>,
    #[serde(default)]
    pub meta: DashboardMeta,
}

impl Dashboard {
    /// UID stored inside the model, if any.
    pub fn uid(&self) -> Option<&str> {
        self.model.get("uid").and_then(Value::as_str)
    }

    /// Title stored inside the model, or an empty string.
    pub fn title(&self) -> &str {
        self.model
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Slug from the metadata.
    pub fn slug(&self) -> &str {
        &self.meta.slug
    }
}

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SaveDashboardRequest {
    pub dashboard: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    pub overwrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SaveDashboardRequest {
    /// Build an overwriting save of `dashboard`, keeping it in its current folder.
    ///
    /// The General folder has an empty folder UID and is omitted from the body.
    pub fn overwrite(dashboard: Dashboard) -> Self {
        let folder_uid = Some(dashboard.meta.folder_uid).filter(|uid| !uid.is_empty());
        Self {
            dashboard: dashboard.model,
            folder_uid,
            overwrite: true,
            message: None,
        }
    }

    /// Attach a version history message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Response of `POST /api/dashboards/db`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SaveDashboardResponse {
    pub id: i64,
    pub uid: String,
    pub url: String,
    pub status: String,
    pub version: i64,
    pub slug: String,
}

/// Error body Grafana returns with non-2xx responses.
#[derive(Debug, Deserialize, Clone)]
pub struct GrafanaErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
