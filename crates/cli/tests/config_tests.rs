//! Connection settings are validated before any request is sent.

mod common;

use common::exemplar_cmd;
use predicates::prelude::*;
use wiremock::MockServer;

#[test]
fn test_missing_url_fails_fast() {
    let mut cmd = exemplar_cmd();
    cmd.env("GRAFANA_API_TOKEN", "test-token");

    cmd.assert()
        .code(9)
        .stderr(predicate::str::contains("Failed to provide required flag 'url'"));
}

#[test]
fn test_missing_token_fails_fast() {
    let mut cmd = exemplar_cmd();
    cmd.args(["--url", "http://localhost:3000", "discover"]);

    cmd.assert()
        .code(9)
        .stderr(predicate::str::contains("'api-token'"));
}

#[test]
fn test_invalid_url_is_rejected() {
    let mut cmd = exemplar_cmd();
    cmd.args(["--url", "not a url", "--api-token", "t"]);

    cmd.assert().code(9);
}

#[test]
fn test_token_is_never_echoed() {
    let mut cmd = exemplar_cmd();
    cmd.args(["--url", "ftp://grafana.local", "--api-token", "super-secret-token"]);

    cmd.assert()
        .code(9)
        .stderr(predicate::str::contains("super-secret-token").not());
}

#[tokio::test]
async fn test_no_request_sent_when_token_missing() {
    let server = MockServer::start().await;

    let mut cmd = exemplar_cmd();
    cmd.env("GRAFANA_URL", server.uri());
    cmd.assert().code(9);

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[test]
fn test_help_lists_subcommands() {
    exemplar_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("remediate"));
}
