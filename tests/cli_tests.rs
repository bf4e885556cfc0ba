//! Integration tests for the shortest_paths binary

use std::fs;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

fn shortest_paths() -> Command {
    let mut cmd = cargo_bin_cmd!("shortest_paths");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_example_distances() {
    shortest_paths().assert().success().stdout(
        "Shortest distances from node A:\n  A: 0\n  B: 3\n  C: 1\n  D: 4\n  E: 7\n  F: 10\n",
    );
}

#[test]
fn test_scan_algorithm_prints_same_output() {
    let heap = shortest_paths().output().unwrap();
    let scan = shortest_paths().args(["--algorithm", "scan"]).output().unwrap();
    assert!(scan.status.success());
    assert_eq!(heap.stdout, scan.stdout);
}

#[test]
fn test_missing_start_node_fails() {
    shortest_paths()
        .args(["--start", "Z"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Start node \"Z\" is not a key of the graph"));
}

#[test]
fn test_graph_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, r#"{"s": [["t", 2.5], ["u", 1]], "u": [["t", 1]], "t": [], "x": []}"#)
        .unwrap();

    shortest_paths()
        .arg("--graph")
        .arg(&path)
        .args(["--start", "s"])
        .assert()
        .success()
        .stdout("Shortest distances from node s:\n  s: 0\n  u: 1\n  t: 2\n  x: inf\n");
}

#[test]
fn test_negative_weight_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("negative.json");
    fs::write(&path, r#"{"A": [["B", -1]], "B": []}"#).unwrap();

    shortest_paths()
        .arg("--graph")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Negative edge weight"));
}

#[test]
fn test_unreadable_graph_file_fails() {
    let dir = tempdir().unwrap();
    shortest_paths()
        .arg("--graph")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();
    shortest_paths()
        .arg("--graph")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed graph document"));
}

#[test]
fn test_json_format_and_stats() {
    let output = shortest_paths()
        .args(["--format", "json", "--stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["source"], "A");
    assert_eq!(table["distances"]["E"], 7.0);
    assert_eq!(table["distances"]["F"], 10.0);

    let stats: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(stats["nodes_settled"], 6);
    assert!(stats["edges_relaxed"].as_u64().unwrap() >= 5);
}

#[test]
fn test_text_stats_go_to_stderr() {
    shortest_paths()
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Shortest distances from node A:"))
        .stderr(predicate::str::contains("settled=6"));
}
