//! Integration tests for the agentmail binary

use assert_cmd::cargo;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::{Value, json};
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command with a clean environment.
///
/// `AGENTMAIL_HOME` points at an empty temp dir so a developer's real
/// `~/.config/agentmail/config.toml` never leaks into the test.
fn agentmail(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("agentmail");
    cmd.env("AGENTMAIL_HOME", home.path())
        .env_remove("AGENTMAIL_API_KEY")
        .env_remove("AGENTMAIL_BASE_URL")
        .env_remove("AGENTMAIL_TIMEOUT_SECS")
        .env_remove("AGENTMAIL_LOG");
    cmd
}

/// Run the binary against a mock server, off the async runtime
async fn run_against(server: &MockServer, args: &[&str]) -> Output {
    let base_url = format!("{}/v0", server.uri());
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        agentmail(&home)
            .env("AGENTMAIL_API_KEY", "am_env")
            .env("AGENTMAIL_BASE_URL", base_url)
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

#[test]
fn test_no_args_prints_usage() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .assert()
        .success()
        .stdout(contains("inboxes"))
        .stdout(contains("threads"))
        .stdout(contains("messages"))
        .stdout(contains("attachments"))
        .stdout(contains("AGENTMAIL_API_KEY"));
}

#[test]
fn test_help_lists_groups_and_api_key_flag() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("CLI for AgentMail"))
        .stdout(contains("Commands:"))
        .stdout(contains("inboxes"))
        .stdout(contains("threads"))
        .stdout(contains("messages"))
        .stdout(contains("attachments"))
        .stdout(contains("--api-key"))
        .stdout(contains("-k"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^agentmail \d+\.\d+\.\d+\s*$").unwrap());
}

#[test]
fn test_group_help_lists_subcommands() {
    let cases: &[(&str, &[&str])] = &[
        ("inboxes", &["list", "get", "create", "delete"]),
        ("threads", &["list", "get"]),
        ("messages", &["send", "reply", "forward", "update"]),
        ("attachments", &["get"]),
    ];

    for (group, subcommands) in cases {
        let home = TempDir::new().unwrap();
        let mut assert = agentmail(&home).args([*group, "--help"]).assert().success();
        for sub in *subcommands {
            assert = assert.stdout(contains(*sub));
        }
    }
}

#[test]
fn test_missing_api_key_fails() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .args(["inboxes", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("AGENTMAIL_API_KEY"))
        .stderr(contains("\"error\""));
}

#[test]
fn test_api_key_from_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/agentmail");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[api]\napi_key = \"am_file\"\n").unwrap();

    // Key resolves, so the failure is the malformed argument, not the key
    agentmail(&home)
        .args(["threads", "list", "inbox_1", "--labels", "[broken"])
        .assert()
        .code(1)
        .stderr(contains("Invalid JSON array: [broken"))
        .stderr(contains("AGENTMAIL_API_KEY").not());
}

#[test]
fn test_malformed_json_array_fails() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .args(["-k", "am_flag", "messages", "update", "inbox_1", "msg_1", "--add-labels", "[oops"])
        .assert()
        .code(1)
        .stderr(contains("Invalid JSON array"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .args(["inboxes", "list", "--bogus"])
        .assert()
        .code(1);
}

#[test]
fn test_tool_style_invocation_is_rejected() {
    for args in [&["list-tools"][..], &["--list-tools"], &["list_inboxes"]] {
        let home = TempDir::new().unwrap();
        agentmail(&home)
            .env("AGENTMAIL_API_KEY", "am_env")
            .args(args)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn test_send_without_to_exits_one() {
    let home = TempDir::new().unwrap();
    agentmail(&home)
        .args(["-k", "am_flag", "messages", "send", "inbox_1", "--subject", "Hi"])
        .assert()
        .code(1)
        .stderr(contains("--to"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inboxes_delete_prints_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v0/inboxes/inbox_1"))
        .and(header("authorization", "Bearer am_env"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["inboxes", "delete", "inbox_1"]).await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\n  \"success\": true,\n  \"deleted\": \"inbox_1\"\n}\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inboxes_list_prints_response() {
    let server = MockServer::start().await;
    let body = json!({"count": 1, "inboxes": [{"inbox_id": "bot@agentmail.to"}]});
    Mock::given(method("GET"))
        .and(path("/v0/inboxes"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["inboxes", "list"]).await;

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, body);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inboxes_create_without_flags_posts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/inboxes"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inbox_id": "x@agentmail.to"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["inboxes", "create"]).await;
    assert!(output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_key_flag_overrides_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/inboxes/inbox_1"))
        .and(header("authorization", "Bearer am_flag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inbox_id": "inbox_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["--api-key", "am_flag", "inboxes", "get", "inbox_1"]).await;
    assert!(output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_messages_send_posts_recipients() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/inboxes/inbox_1/messages/send"))
        .and(body_json(json!({
            "to": ["a@x.com", "b@x.com"],
            "subject": "Hello",
            "text": "Hi there"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message_id": "msg_1", "thread_id": "thr_1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &[
            "messages", "send", "inbox_1", "--to", "a@x.com", "--to", "b@x.com", "-s", "Hello", "-t",
            "Hi there",
        ],
    )
    .await;

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["message_id"], "msg_1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported_on_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/threads/thr_1/attachments/att_404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"name": "NotFoundError", "message": "Attachment not found"})),
        )
        .mount(&server)
        .await;

    let output = run_against(&server, &["attachments", "get", "thr_1", "att_404"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let report: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(
        report,
        json!({
            "error": "Attachment not found",
            "statusCode": 404,
            "details": {"name": "NotFoundError", "message": "Attachment not found"}
        })
    );
}
