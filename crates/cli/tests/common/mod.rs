//! Shared test utilities for exemplar-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: `.env` loading is disabled and host
//!   `GRAFANA_*` variables are cleared.
//! - Retries are off so failure scenarios do not sleep through backoff.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Returns a hermetic `exemplar-cli` command with no connection settings.
pub fn exemplar_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("exemplar-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_API_TOKEN")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_MAX_RETRIES")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command pointed at `server`, with its checkpoint under `dir`.
pub fn exemplar_cmd_for(server: &MockServer, dir: &Path) -> Command {
    let mut cmd = exemplar_cmd();
    cmd.env("GRAFANA_URL", server.uri())
        .env("GRAFANA_API_TOKEN", TOKEN)
        .env("GRAFANA_MAX_RETRIES", "0")
        .arg("--checkpoint-file")
        .arg(dir.join("exemplar-dashboards"));
    cmd
}

/// Serve a single search page listing `uids`.
pub async fn mount_search(server: &MockServer, uids: &[&str]) {
    let hits: Vec<Value> = uids
        .iter()
        .map(|uid| json!({"uid": uid, "title": format!("Dashboard {}", uid), "type": "dash-db"}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits))
        .mount(server)
        .await;
}

/// Serve `model` (plus its uid) for `GET /api/dashboards/uid/{uid}`.
pub async fn mount_dashboard(server: &MockServer, uid: &str, mut model: Value) {
    model["uid"] = json!(uid);
    Mock::given(method("GET"))
        .and(path(format!("/api/dashboards/uid/{}", uid)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dashboard": model,
            "meta": {"slug": format!("slug-{}", uid), "folderUid": "infra", "version": 3}
        })))
        .mount(server)
        .await;
}

pub fn save_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": 1,
        "uid": "a",
        "url": "/d/a/slug-a",
        "status": "success",
        "version": 4,
        "slug": "slug-a"
    }))
}

/// Bodies of every save request the server received, in order.
pub async fn saved_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == "/api/dashboards/db")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}
