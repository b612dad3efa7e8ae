// ABOUTME: Integration tests for the CLI application
// ABOUTME: Tests command-line interface functionality end to end

use std::process::Command;

mod common;
use common::{TestEnvironment, TestManifestBuilder};

fn cairn_command(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cairn"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = cairn_command(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cairn"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("plan"));
}

#[test]
fn test_cli_version() {
    let output = cairn_command(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cairn"));
}

#[test]
fn test_cli_run_simple_manifest() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_simple").add_echo_task("hello", "from cli test");
    let manifest_file = env.create_manifest_file("cli_simple", &builder);

    let output = cairn_command(&["run", manifest_file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hello"));
    assert!(stdout.contains("Success Rate: 100%"));
}

#[test]
fn test_cli_run_failure_sets_exit_code() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_failure").add_failing_task("broken");
    let manifest_file = env.create_manifest_file("cli_failure", &builder);

    let output = cairn_command(&["run", manifest_file.to_str().unwrap()]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ broken"));
}

#[test]
fn test_cli_run_writes_json_report() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_report").add_echo_task("only", "one");
    let manifest_file = env.create_manifest_file("cli_report", &builder);
    let report_file = env.path().join("report.json");

    let output = cairn_command(&[
        "run",
        manifest_file.to_str().unwrap(),
        "--output",
        report_file.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_file).unwrap()).unwrap();
    assert_eq!(report["summary"]["total_tasks"], 1);
    assert_eq!(report["results"][0]["task_name"], "only");
}

#[test]
fn test_cli_validate_detects_cycle() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_cycle")
        .add_dependent_task("a", "echo a", vec!["b"])
        .add_dependent_task("b", "echo b", vec!["a"]);
    let manifest_file = env.create_manifest_file("cli_cycle", &builder);

    let output = cairn_command(&["validate", manifest_file.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Circular dependency"));
}

#[test]
fn test_cli_plan_prints_order() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_plan")
        .add_dependent_task("second", "echo 2", vec!["first"])
        .add_echo_task("first", "1");
    let manifest_file = env.create_manifest_file("cli_plan", &builder);

    let output = cairn_command(&["plan", manifest_file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_pos = stdout.find("first").unwrap();
    let second_pos = stdout.find("second").unwrap();
    assert!(first_pos < second_pos);
}

#[test]
fn test_cli_dry_run() {
    let env = TestEnvironment::new();
    let builder = TestManifestBuilder::new("cli_dry")
        .add_dependent_task("writer", &env.append_command("writer"), vec![]);
    let manifest_file = env.create_manifest_file("cli_dry", &builder);

    let output = cairn_command(&["run", manifest_file.to_str().unwrap(), "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Success Rate: 100%"));
    assert!(env.read_order_log().is_empty());
}
