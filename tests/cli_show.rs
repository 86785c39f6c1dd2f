//! Integration tests for `urbanenv show`.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn show_prints_sections_with_origins() {
    let ctx = TestContext::new();
    ctx.write_env("API_PORT=9000\n");

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[api] API Server"))
        .stdout(predicate::str::contains("API_PORT=9000  [file]"))
        .stdout(predicate::str::contains("QDRANT_PORT=6333  [default]"));
}

#[test]
fn show_redacts_secrets_by_default() {
    let ctx = TestContext::new();
    ctx.write_env("API_SECRET_KEY=topsecret\n");

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("sha256:"))
        .stdout(predicate::str::contains("topsecret").not());
}

#[test]
fn show_reveal_prints_secret_values() {
    let ctx = TestContext::new();
    ctx.write_env("API_SECRET_KEY=topsecret\n");

    ctx.cli()
        .args(["show", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API_SECRET_KEY=topsecret"));
}

#[test]
fn show_marks_process_environment_values() {
    let ctx = TestContext::new();
    ctx.write_env("MQTT_BROKER=localhost\n");

    ctx.cli()
        .arg("show")
        .env("MQTT_BROKER", "sensors.campus.lan")
        .assert()
        .success()
        .stdout(predicate::str::contains("MQTT_BROKER=sensors.campus.lan  [process]"));
}

#[test]
fn show_section_filter() {
    let ctx = TestContext::new();
    ctx.write_env("");

    ctx.cli()
        .args(["show", "--section", "mqtt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[mqtt]"))
        .stdout(predicate::str::contains("[api]").not());
}

#[test]
fn show_rejects_unknown_section() {
    let ctx = TestContext::new();
    ctx.write_env("");

    ctx.cli()
        .args(["show", "--section", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section 'nope'"));
}

#[test]
fn show_json_is_parseable_and_redacted() {
    let ctx = TestContext::new();
    ctx.write_env("API_SECRET_KEY=topsecret\nAPI_PORT=9000\n");

    let output = ctx.cli().args(["show", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = parsed["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 12);

    let api = sections.iter().find(|s| s["name"] == "api").unwrap();
    let secret = api["vars"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["key"] == "API_SECRET_KEY")
        .unwrap();
    assert!(secret["value"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn show_toml_round_trips() {
    let ctx = TestContext::new();
    ctx.write_env("API_PORT=9000\n");

    let output = ctx.cli().args(["show", "--format", "toml"]).output().unwrap();
    assert!(output.status.success());

    let parsed: toml::Table = String::from_utf8(output.stdout).unwrap().parse().unwrap();
    assert_eq!(
        parsed["api"]["API_PORT"].as_str(),
        Some("9000"),
        "API_PORT should appear under the [api] table"
    );
}

#[test]
fn show_fails_without_env_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Env file not found"));
}
