//! Integration tests for the command-line surface

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{run_seekbar, temp_config};

fn seekbar() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seekbar"));
    cmd.env("NO_COLOR", "1")
        .env_remove("SEEKBAR_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    seekbar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("range"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn no_subcommand_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_seekbar(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// range
// ============================================================================

#[test]
fn range_prints_css_percentages() {
    seekbar()
        .args(["range", "0", "200", "200"])
        .assert()
        .success()
        .stdout("left: 0%\nwidth: 100%\n");
}

#[test]
fn range_json_output() {
    let (stdout, _stderr, exit_code) = run_seekbar(&["range", "90", "100", "100", "--json"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    {
      "left": "90%",
      "width": "10%"
    }
    "#);
}

#[test]
fn range_json_is_parseable() {
    let (stdout, _stderr, exit_code) = run_seekbar(&["range", "30", "90", "120", "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["left"], "25%");
    assert_eq!(value["width"], "50%");
}

#[test]
fn range_zero_duration_fails() {
    seekbar()
        .args(["range", "0", "10", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duration must be greater than zero"));
}

#[test]
fn range_negative_duration_fails_with_message() {
    let (_stdout, stderr, exit_code) = run_seekbar(&["range", "10", "20", "-5"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("duration must be greater than zero"));
}

#[test]
fn range_negative_start_is_passed_through() {
    seekbar()
        .args(["range", "-50", "50", "200"])
        .assert()
        .success()
        .stdout("left: -25%\nwidth: 50%\n");
}

#[test]
fn range_missing_arguments_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_seekbar(&["range", "10"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
}

// ============================================================================
// demo
// ============================================================================

#[test]
fn demo_rejects_bad_chapter_list() {
    let (_dir, path) = temp_config();

    seekbar()
        .args(["demo", "--chapters", "abc", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("START-END"));
}
