//! In-memory platform and recording observer for workflow tests.
//!
//! # Invariants
//! - `FakeDashboardApi` serves dashboards in insertion order.
//! - Failures are injected per UID and per call kind.
//! - Saved payloads are recorded and also replace the stored model, so a
//!   second pass sees the result of the first.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use exemplar_migrate::{DashboardApi, FailedStep, MigrationObserver, Stage};
use grafana_client::{
    ClientError, Dashboard, DashboardMeta, DashboardSearchHit, Result, SaveDashboardRequest,
    SaveDashboardResponse, SearchCriteria,
};
use serde_json::{Map, Value};

#[derive(Default)]
pub struct FakeDashboardApi {
    order: Vec<String>,
    models: Mutex<HashMap<String, Map<String, Value>>>,
    folders: HashMap<String, String>,
    tags: HashMap<String, Vec<String>>,
    fail_list: bool,
    fail_fetch: HashSet<String>,
    fail_save: HashSet<String>,
    unauthorized_save: HashSet<String>,
    saved: Mutex<Vec<SaveDashboardRequest>>,
    fetch_calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeDashboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dashboard whose model is `model` plus its own `uid`.
    pub fn with_dashboard(mut self, uid: &str, model: Value) -> Self {
        let mut map = match model {
            Value::Object(map) => map,
            other => panic!("dashboard model must be an object, got {}", other),
        };
        map.insert("uid".to_string(), Value::String(uid.to_string()));
        self.order.push(uid.to_string());
        self.models.get_mut().unwrap().insert(uid.to_string(), map);
        self
    }

    pub fn in_folder(mut self, uid: &str, folder_uid: &str) -> Self {
        self.folders.insert(uid.to_string(), folder_uid.to_string());
        self
    }

    pub fn with_tags(mut self, uid: &str, tags: &[&str]) -> Self {
        self.tags
            .insert(uid.to_string(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_fetch(mut self, uid: &str) -> Self {
        self.fail_fetch.insert(uid.to_string());
        self
    }

    pub fn failing_save(mut self, uid: &str) -> Self {
        self.fail_save.insert(uid.to_string());
        self
    }

    pub fn unauthorized_save(mut self, uid: &str) -> Self {
        self.unauthorized_save.insert(uid.to_string());
        self
    }

    pub fn saved(&self) -> Vec<SaveDashboardRequest> {
        self.saved.lock().unwrap().clone()
    }

    pub fn saved_uids(&self) -> Vec<String> {
        self.saved()
            .iter()
            .filter_map(|r| r.dashboard.get("uid").and_then(Value::as_str).map(String::from))
            .collect()
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    pub fn model(&self, uid: &str) -> Map<String, Value> {
        self.models.lock().unwrap()[uid].clone()
    }

    fn hit(&self, uid: &str) -> DashboardSearchHit {
        DashboardSearchHit {
            uid: uid.to_string(),
            title: format!("Dashboard {}", uid),
            kind: "dash-db".to_string(),
            tags: self.tags.get(uid).cloned().unwrap_or_default(),
            folder_uid: self.folders.get(uid).cloned(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl DashboardApi for FakeDashboardApi {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSearchHit>> {
        if self.fail_list {
            return Err(ClientError::ApiError {
                status: 500,
                url: "http://grafana.test/api/search".to_string(),
                message: "search unavailable".to_string(),
            });
        }
        Ok(self.order.iter().map(|uid| self.hit(uid)).collect())
    }

    async fn search_dashboards(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<DashboardSearchHit>> {
        let hits = self.list_dashboards().await?;
        Ok(hits
            .into_iter()
            .filter(|hit| criteria.tags.iter().all(|t| hit.tags.contains(t)))
            .filter(|hit| {
                criteria.folder_uids.is_empty()
                    || hit
                        .folder_uid
                        .as_ref()
                        .is_some_and(|f| criteria.folder_uids.contains(f))
            })
            .collect())
    }

    async fn get_dashboard_by_uid(&self, uid: &str) -> Result<Dashboard> {
        self.fetch_calls.lock().unwrap().push(uid.to_string());

        if self.fail_fetch.contains(uid) {
            return Err(ClientError::NotFound(format!(
                "http://grafana.test/api/dashboards/uid/{}",
                uid
            )));
        }

        let model = self
            .models
            .lock()
            .unwrap()
            .get(uid)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(uid.to_string()))?;

        Ok(Dashboard {
            model,
            meta: DashboardMeta {
                slug: format!("slug-{}", uid),
                folder_uid: self.folders.get(uid).cloned().unwrap_or_default(),
                ..Default::default()
            },
        })
    }

    async fn save_dashboard(
        &self,
        request: &SaveDashboardRequest,
    ) -> Result<SaveDashboardResponse> {
        let uid = request
            .dashboard
            .get("uid")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if self.unauthorized_save.contains(&uid) {
            return Err(ClientError::Unauthorized("token expired".to_string()));
        }
        if self.fail_save.contains(&uid) {
            return Err(ClientError::Conflict("version-mismatch".to_string()));
        }

        self.saved.lock().unwrap().push(request.clone());
        self.models
            .lock()
            .unwrap()
            .insert(uid.clone(), request.dashboard.clone());

        Ok(SaveDashboardResponse {
            uid: uid.clone(),
            status: "success".to_string(),
            version: 2,
            slug: format!("slug-{}", uid),
            ..Default::default()
        })
    }
}

/// Observer event, flattened for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Progress(Stage, usize, usize),
    Fetched(Stage, String),
    Matched(String),
    Rewritten(String, usize),
    Saved(String),
    Failed(Stage, String, FailedStep),
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Progress(_, processed, total) => Some((processed, total)),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<(String, FailedStep)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failed(_, uid, step) => Some((uid, step)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl MigrationObserver for RecordingObserver {
    fn progress(&self, stage: Stage, processed: usize, total: usize) {
        self.push(Event::Progress(stage, processed, total));
    }

    fn fetched(&self, stage: Stage, uid: &str, _slug: &str) {
        self.push(Event::Fetched(stage, uid.to_string()));
    }

    fn matched(&self, uid: &str, _slug: &str) {
        self.push(Event::Matched(uid.to_string()));
    }

    fn rewritten(&self, uid: &str, _slug: &str, flipped: usize) {
        self.push(Event::Rewritten(uid.to_string(), flipped));
    }

    fn saved(&self, uid: &str, _response: &SaveDashboardResponse) {
        self.push(Event::Saved(uid.to_string()));
    }

    fn failed(&self, stage: Stage, uid: &str, step: FailedStep, _error: &ClientError) {
        self.push(Event::Failed(stage, uid.to_string(), step));
    }
}

/// Owned UID list from string literals.
#[allow(dead_code)]
pub fn uids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
