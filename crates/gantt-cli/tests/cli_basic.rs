//! Basic CLI E2E tests.
//!
//! Tests run the built binary against snapshot files in a temp directory,
//! with the config directory isolated per test.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with an isolated config directory.
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_gantt-cli"))
        .args(args)
        .env("GANTT_PLANNER_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

/// Two overlapping tasks, one separate task and one link between them.
fn write_snapshot(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("tasks.json");
    let json = r#"{
        "tasks": [
            {"id": "a", "title": "A", "start_date": "2025-03-10T00:00:00Z",
             "end_date": "2025-03-12T00:00:00Z", "assignee": "Ann", "progress": 0},
            {"id": "b", "title": "B", "start_date": "2025-03-11T00:00:00Z",
             "end_date": "2025-03-13T00:00:00Z", "assignee": "Ben", "progress": 20},
            {"id": "c", "title": "C", "start_date": "2025-03-20T00:00:00Z",
             "end_date": "2025-03-20T00:00:00Z", "assignee": "Cat", "progress": 100}
        ],
        "dependencies": [
            {"id": "ab", "from_task_id": "a", "to_task_id": "b", "type": "finish-to-start"},
            {"id": "bx", "from_task_id": "b", "to_task_id": "missing", "type": "start-to-start"}
        ]
    }"#;
    std::fs::write(&path, json).unwrap();
    path
}

fn parse_json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("Failed to parse JSON output")
}

#[test]
fn test_tasks_list_uses_sample_project() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["tasks", "list", "--json"]);
    assert_eq!(code, 0, "tasks list failed");
    let tasks = parse_json(&stdout);
    assert_eq!(tasks.as_array().unwrap().len(), 4);
    assert_eq!(tasks[0]["title"], "Project Planning");
}

#[test]
fn test_tasks_list_without_seed_is_empty() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "data.seed_sample_data", "false"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(dir.path(), &["tasks", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No tasks"));
}

#[test]
fn test_tasks_deps_lists_file_dependencies() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, _) = run_cli(dir.path(), &["--file", file.to_str().unwrap(), "tasks", "deps"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ab  a -> b  finish-to-start"));
}

#[test]
fn test_conflicts_counts_overlaps() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, _) = run_cli(dir.path(), &["--file", file.to_str().unwrap(), "conflicts", "--json"]);
    assert_eq!(code, 0);
    let out = parse_json(&stdout);
    assert_eq!(out["count"], 1);
    assert_eq!(out["pairs"][0], serde_json::json!(["a", "b"]));
}

#[test]
fn test_resolve_prints_shifted_snapshot() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, stderr) = run_cli(dir.path(), &["-f", file.to_str().unwrap(), "resolve"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("shifted 1 tasks, 0 conflicts remaining"));

    let snapshot = parse_json(&stdout);
    let b = &snapshot["tasks"][1];
    assert_eq!(b["id"], "b");
    assert_eq!(b["start_date"], "2025-03-13T00:00:00Z");
    assert_eq!(b["end_date"], "2025-03-15T00:00:00Z");
    assert_eq!(snapshot["dependencies"].as_array().unwrap().len(), 2);

    // The snapshot file itself is never rewritten
    let on_disk = std::fs::read_to_string(&file).unwrap();
    assert!(on_disk.contains("2025-03-11T00:00:00Z"));
}

#[test]
fn test_range_pads_a_week() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, _) = run_cli(dir.path(), &["-f", file.to_str().unwrap(), "range"]);
    assert_eq!(code, 0);
    let range = parse_json(&stdout);
    assert_eq!(range["start"], "2025-03-03T00:00:00Z");
    assert_eq!(range["end"], "2025-03-27T00:00:00Z");
}

#[test]
fn test_layout_skips_dangling_dependency() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["-f", file.to_str().unwrap(), "layout", "--zoom", "week"],
    );
    assert_eq!(code, 0);
    let chart = parse_json(&stdout);
    assert_eq!(chart["zoom"], "week");
    assert_eq!(chart["bars"].as_array().unwrap().len(), 3);
    assert_eq!(chart["arrows"].as_array().unwrap().len(), 1);
    assert_eq!(chart["arrows"][0]["dependency_id"], "ab");
}

#[test]
fn test_drag_move_keeps_duration() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    // Chart starts 2025-03-03; 400px at day zoom is ten days later
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["-f", file.to_str().unwrap(), "drag", "a", "move", "400", "--zoom", "day"],
    );
    assert_eq!(code, 0);
    let task = parse_json(&stdout);
    assert_eq!(task["start_date"], "2025-03-13T00:00:00Z");
    assert_eq!(task["end_date"], "2025-03-15T00:00:00Z");
}

#[test]
fn test_drag_rejected_resize_is_ignored() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["-f", file.to_str().unwrap(), "drag", "a", "resize-right", "-40", "--zoom", "day"],
    );
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("drop ignored"));
}

#[test]
fn test_drag_far_outside_chart_is_ignored() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    for x in ["1e13", "inf", "-1e300"] {
        let (code, stdout, stderr) = run_cli(
            dir.path(),
            &["-f", file.to_str().unwrap(), "drag", "a", "move", x],
        );
        assert_eq!(code, 0, "drag to {x} failed: {stderr}");
        assert!(stdout.is_empty());
        assert!(stderr.contains("drop ignored"));
    }
}

#[test]
fn test_drag_unknown_task_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);
    let (code, _, stderr) = run_cli(dir.path(), &["-f", file.to_str().unwrap(), "drag", "zzz", "move", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("task not found: zzz"));
}

#[test]
fn test_missing_snapshot_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let (code, _, stderr) = run_cli(dir.path(), &["-f", missing.to_str().unwrap(), "conflicts"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("cannot read"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "chart.zoom", "month"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "chart.zoom"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "month");
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "chart.zoom", "decade"]);
    assert_eq!(code, 1);
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "chart.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}
