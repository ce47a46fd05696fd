//! Integration tests for the resolve and remote commands

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a command with a clean resolution-path environment
fn crossdc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("crossdc");
    cmd.env_remove("CROSSDC_PROPS_PATH").env("CROSSDC_LOG", "error");
    cmd
}

/// Stage a node file under the namespace root
fn write_node(root: &Path, node: &str, contents: &str) {
    let path = root.join(node.trim_start_matches('/'));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_resolve_from_remote_node() {
    let temp_dir = TempDir::new().unwrap();
    write_node(
        temp_dir.path(),
        "/crossdc.properties",
        "bootstrapServers=kafka:9092\ntopicName=events\n",
    );

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrapServers = kafka:9092 (remote)"))
        .stdout(predicate::str::contains("topicName = events (remote)"));
}

#[test]
fn test_resolve_local_set_wins() {
    let temp_dir = TempDir::new().unwrap();
    write_node(
        temp_dir.path(),
        "/crossdc.properties",
        "bootstrapServers=kafka:9092\ntopicName=events\n",
    );

    let output = crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--set")
        .arg("topicName=local-topic")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["path"], "/crossdc.properties");
    assert_eq!(json["remotePresent"], true);
    assert_eq!(json["config"]["topicName"], "local-topic");
    assert_eq!(json["config"]["bootstrapServers"], "kafka:9092");
    assert_eq!(json["sources"]["topicName"], "local");
    assert_eq!(json["sources"]["bootstrapServers"], "remote");
}

#[test]
fn test_resolve_local_file_and_custom_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("ns");
    write_node(&root, "/clusters/east/crossdc.properties", "topicName=east\n");

    let local_file = temp_dir.path().join("local.properties");
    fs::write(&local_file, "bootstrapServers = local:9092\n").unwrap();

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(&root)
        .arg("--path")
        .arg("/clusters/east/crossdc.properties")
        .arg("--local")
        .arg(&local_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolved from /clusters/east/crossdc.properties (node present)",
        ))
        .stdout(predicate::str::contains("bootstrapServers = local:9092 (local)"))
        .stdout(predicate::str::contains("topicName = east (remote)"));
}

#[test]
fn test_resolve_env_path_override() {
    let temp_dir = TempDir::new().unwrap();
    write_node(
        temp_dir.path(),
        "/alt.properties",
        "bootstrapServers=alt:9092\ntopicName=alt\n",
    );

    crossdc_cmd()
        .env("CROSSDC_PROPS_PATH", "/alt.properties")
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("topicName = alt (remote)"));
}

#[test]
fn test_resolve_missing_topic_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_node(temp_dir.path(), "/crossdc.properties", "bootstrapServers=kafka:9092\n");

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: topicName not specified for producer",
        ));
}

#[test]
fn test_resolve_without_node_needs_local_settings() {
    let temp_dir = TempDir::new().unwrap();

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bootstrapServers not specified"));

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--set")
        .arg("bootstrapServers=k:1")
        .arg("--set")
        .arg("topicName=t")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no node)"));
}

#[test]
fn test_resolve_dataless_node_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("crossdc.properties")).unwrap();

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--set")
        .arg("bootstrapServers=k:1")
        .arg("--set")
        .arg("topicName=t")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no data"));
}

#[test]
fn test_resolve_rejects_malformed_set() {
    let temp_dir = TempDir::new().unwrap();

    crossdc_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--set")
        .arg("novalue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_remote_lists_properties() {
    let temp_dir = TempDir::new().unwrap();
    write_node(
        temp_dir.path(),
        "/crossdc.properties",
        "# comment\ntopicName=events\nlingerMs=5\n",
    );

    crossdc_cmd()
        .arg("remote")
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/crossdc.properties:"))
        .stdout(predicate::str::contains("lingerMs = 5"))
        .stdout(predicate::str::contains("topicName = events"));
}

#[test]
fn test_remote_json_without_node() {
    let temp_dir = TempDir::new().unwrap();

    let output = crossdc_cmd()
        .arg("remote")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["present"], false);
    assert!(json["properties"].is_null());
}

#[test]
fn test_remote_honors_custom_path() {
    let temp_dir = TempDir::new().unwrap();
    write_node(temp_dir.path(), "/crossdc.properties", "topicName=default\n");
    write_node(temp_dir.path(), "/clusters/west/crossdc.properties", "topicName=west\n");

    let output = crossdc_cmd()
        .arg("remote")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--path")
        .arg("/clusters/west/crossdc.properties")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["path"], "/clusters/west/crossdc.properties");
    assert_eq!(json["present"], true);
    assert_eq!(json["properties"]["topicName"], "west");
}
