//! JSON output: NDJSON deploy events, single-document plan and status.

#![cfg(unix)]

mod common;

use common::{TestEnv, RECEIPT_DEPLOYER, THREE_RESOURCE_MANIFEST};

use serde_json::Value;

/// Parse every non-empty stdout line; panics on anything that is not JSON.
fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("stdout line is not JSON: {line:?}: {e}"))
        })
        .collect()
}

#[test]
fn test_json_deploy_emits_event_stream() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);
    env.write_deployer("deploy.sh", RECEIPT_DEPLOYER);

    let result = env.run(&["--json", "deploy"]);
    assert!(result.success, "{}", result.combined_output());

    let events = json_lines(&result.stdout);
    assert!(events.len() >= 2, "expected start + complete at least");

    let start = &events[0];
    assert_eq!(start["event"], "start");
    assert_eq!(start["command"], "deploy");
    assert_eq!(start["resource_count"], 3);
    assert_eq!(start["pending_count"], 3);

    let deployed: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "resource_deployed")
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(deployed, vec!["network", "server", "dns"]);

    let net = events
        .iter()
        .find(|e| e["event"] == "resource_deployed" && e["name"] == "network")
        .expect("network deployed event");
    assert_eq!(net["identifier"], "id-network");

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["status"], "success");
    assert_eq!(complete["deployed"], 3);
    assert_eq!(complete["failed"], 0);
}

#[test]
fn test_json_deploy_stdout_is_pure_ndjson() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);
    env.write_deployer("deploy.sh", RECEIPT_DEPLOYER);

    let result = env.run(&["--json", "deploy"]);
    assert!(result.success);

    for line in result.stdout.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            line.trim_start().starts_with('{'),
            "non-JSON line on stdout: {line:?}"
        );
    }
}

#[test]
fn test_json_deploy_rerun_reports_skips() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);
    env.write_deployer("deploy.sh", RECEIPT_DEPLOYER);

    assert!(env.run(&["deploy", "--yes"]).success);
    let result = env.run(&["--json", "deploy"]);
    assert!(result.success);

    let events = json_lines(&result.stdout);
    let skipped = events
        .iter()
        .filter(|e| e["event"] == "resource_skipped")
        .count();
    assert_eq!(skipped, 3);

    let net = events
        .iter()
        .find(|e| e["event"] == "resource_skipped" && e["name"] == "network")
        .expect("network skipped event");
    assert_eq!(net["identifier"], "id-network");

    let complete = events.last().unwrap();
    assert_eq!(complete["status"], "success");
    assert_eq!(complete["deployed"], 0);
    assert_eq!(complete["skipped"], 3);
}

#[test]
fn test_json_deploy_failure_event_and_exit_code() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);
    env.write_deployer("deploy.sh", RECEIPT_DEPLOYER);
    env.write_file("fail-server", "");

    let result = env.run(&["--json", "deploy"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);

    let events = json_lines(&result.stdout);
    let failed = events
        .iter()
        .find(|e| e["event"] == "resource_failed")
        .expect("resource_failed event");
    assert_eq!(failed["name"], "server");
    assert!(failed["error"]
        .as_str()
        .unwrap()
        .contains("simulated failure for server"));

    // Halted before dns: no start event for it.
    assert!(!events
        .iter()
        .any(|e| e["event"] == "resource_start" && e["name"] == "dns"));

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["status"], "failed");
    assert_eq!(complete["deployed"], 1);
    assert_eq!(complete["failed"], 1);
}

#[test]
fn test_json_plan_is_a_single_document() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);

    let result = env.run(&["--json", "plan"]);
    assert!(result.success, "{}", result.combined_output());

    let docs = json_lines(&result.stdout);
    assert_eq!(docs.len(), 1);

    let doc = &docs[0];
    let resources = doc["resources"].as_array().expect("resources array");
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[0]["name"], "network");
    assert_eq!(resources[0]["deployed"], false);
    assert_eq!(resources[1]["name"], "server");
    assert_eq!(resources[1]["args"][0]["ref"], "network");
    assert_eq!(resources[1]["args"][1], "small");
    assert_eq!(doc["pending"], 3);
    assert_eq!(doc["deployed"], 0);
}

#[test]
fn test_json_status_tracks_deployment() {
    let env = TestEnv::new();
    env.write_manifest(THREE_RESOURCE_MANIFEST);
    env.write_deployer("deploy.sh", RECEIPT_DEPLOYER);

    let fresh = env.run(&["--json", "status"]);
    assert!(fresh.success);
    let doc = &json_lines(&fresh.stdout)[0];
    assert!(doc["resources"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["state"] == "not-deployed"));
    assert_eq!(doc["deployed"], 0);
    assert_eq!(doc["pending"], 3);

    assert!(env.run(&["deploy", "--yes"]).success);

    let after = env.run(&["--json", "status"]);
    assert!(after.success);
    let doc = &json_lines(&after.stdout)[0];
    let network = &doc["resources"].as_array().unwrap()[0];
    assert_eq!(network["state"], "deployed");
    assert_eq!(network["identifier"], "id-network");
    assert_eq!(network["drift"], false);
    assert_eq!(doc["deployed"], 3);
    assert_eq!(doc["drifted"], 0);
}

#[test]
fn test_json_mode_suppresses_manifest_warnings_on_stdout() {
    let env = TestEnv::new();
    env.write_manifest(&format!("{}\n[outpt]\n", THREE_RESOURCE_MANIFEST));

    let result = env.run(&["--json", "plan"]);
    assert!(result.success, "{}", result.combined_output());

    let docs = json_lines(&result.stdout);
    assert_eq!(docs.len(), 1);
    assert!(!result.stdout.contains("Unknown manifest key"));
}
