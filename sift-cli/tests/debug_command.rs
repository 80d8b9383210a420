//! Integration tests for `sift debug`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn project() -> TestEnv {
    let env = TestEnv::new();
    env.dirs(&["src/Http", "src/Legacy", "vendor/acme/http"]);
    env
}

#[test]
fn test_debug_human_output() {
    let env = project();

    env.command()
        .args(["debug", "src/*", "acme/*", "README.md", "!src/Legacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project root:"))
        .stdout(predicate::str::contains("dependency root:"))
        .stdout(predicate::str::contains("glob"))
        .stdout(predicate::str::contains("dependency_namespace"))
        .stdout(predicate::str::contains("direct (exclusion)"))
        .stdout(predicate::str::contains("resolved (2):"))
        .stdout(predicate::str::contains("vendor/acme/http"));
}

#[test]
fn test_debug_json_output() {
    let env = project();
    let stdout = env.stdout_of(&["debug", "--format", "json", "dependency/acme/*", "!src/Legacy"]);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["patterns"][0]["kind"], "dependency_glob");
    assert_eq!(report["patterns"][1]["exclusion"], true);
    assert_eq!(report["resolved"].as_array().unwrap().len(), 1);
    assert_eq!(
        report["dependency_root"],
        serde_json::Value::String(env.root().join("vendor").to_string_lossy().into_owned())
    );
}

#[test]
fn test_debug_uses_configured_targets() {
    let env = project();
    env.write("sift.yaml", "paths: [src/*]\nexclude: [src/Legacy]\n");

    let stdout = env.stdout_of(&["debug", "--format", "json"]);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let patterns: Vec<&str> = report["patterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pattern"].as_str().unwrap())
        .collect();
    assert_eq!(patterns, vec!["src/*", "!src/Legacy"]);
    assert_eq!(report["resolved"].as_array().unwrap().len(), 1);
}
