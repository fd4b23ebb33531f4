//! Smoke tests for the pocketcalc CLI
//!
//! These run the real binary end to end: argument parsing, engine, state
//! file and results file.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocketcalc binary with a clean environment
fn pocketcalc() -> Command {
    let mut cmd = Command::cargo_bin("pocketcalc").expect("pocketcalc binary should exist");
    cmd.env_remove("POCKETCALC_WIDTH")
        .env_remove("POCKETCALC_STATE")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocketcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("state"));
}

#[test]
fn test_no_args_fails() {
    pocketcalc().assert().failure();
}

// ============================================================================
// Eval Tests
// ============================================================================

#[test]
fn test_eval_chained_sum() {
    pocketcalc()
        .args(["eval", "5 + 3 + 2 ="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_eval_separate_keys() {
    pocketcalc()
        .args(["eval", "12", "-", "20", "="])
        .assert()
        .success()
        .stdout("-8\n");
}

#[test]
fn test_eval_left_to_right() {
    pocketcalc()
        .args(["eval", "5+3*2="])
        .assert()
        .success()
        .stdout("16\n");
}

#[test]
fn test_eval_divide_by_zero_is_not_a_failure() {
    pocketcalc()
        .args(["eval", "7/0="])
        .assert()
        .success()
        .stdout("Erreur\n");
}

#[test]
fn test_eval_unknown_key_fails() {
    pocketcalc()
        .args(["eval", "1 + x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key 'x'"));
}

#[test]
fn test_eval_json_snapshot() {
    pocketcalc()
        .args(["eval", "--json", "5 +"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"displayText\": \"5 + \""))
        .stdout(predicate::str::contains("\"lastOperation\": \"+\""))
        .stdout(predicate::str::contains("\"result\": 5"))
        .stdout(predicate::str::contains("\"isError\": false"));
}

#[test]
fn test_eval_width_truncates() {
    pocketcalc()
        .args(["--width", "4", "eval", "123456"])
        .assert()
        .success()
        .stdout("1234\n");
}

#[test]
fn test_eval_width_from_env() {
    pocketcalc()
        .env("POCKETCALC_WIDTH", "3")
        .args(["eval", "98765"])
        .assert()
        .success()
        .stdout("987\n");
}

#[test]
fn test_eval_width_zero_unlimited() {
    pocketcalc()
        .args(["--width", "0", "eval", "99999999*99999999="])
        .assert()
        .success()
        .stdout("9999999800000001\n");
}

// ============================================================================
// State File Tests
// ============================================================================

#[test]
fn test_state_carries_between_runs() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "7 *"])
        .assert()
        .success()
        .stdout("7 * \n");

    assert!(state.exists());

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "6 ="])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_state_operator_swap_across_runs() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "5+"])
        .assert()
        .success()
        .stdout("5 + \n");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "-3="])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_state_from_env() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .env("POCKETCALC_STATE", &state)
        .args(["eval", "9 -"])
        .assert()
        .success();

    pocketcalc()
        .env("POCKETCALC_STATE", &state)
        .args(["eval", "10 ="])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn test_state_unchanged_after_bad_key() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "5 +"])
        .assert()
        .success();
    let before = fs::read_to_string(&state).unwrap();

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "3 ?"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&state).unwrap(), before);
}

#[test]
fn test_state_show_and_reset() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "4 % 0 ="])
        .assert()
        .success()
        .stdout("Erreur\n");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["state", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"displayText\": \"Erreur: mod/0\""))
        .stdout(predicate::str::contains("\"isError\": true"));

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["state", "reset"])
        .assert()
        .success();

    assert!(!state.exists());
}

#[test]
fn test_state_show_requires_path() {
    pocketcalc()
        .args(["state", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--state"));
}

#[test]
fn test_corrupt_state_fails() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");
    fs::write(&state, "{not json").unwrap();

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid state file"));
}

// ============================================================================
// Results File Tests
// ============================================================================

#[test]
fn test_results_file_appends_each_equals() {
    let temp = TempDir::new().unwrap();
    let results = temp.path().join("results.txt");

    pocketcalc()
        .arg("--results")
        .arg(&results)
        .args(["eval", "2 + 2 = * 3 ="])
        .assert()
        .success()
        .stdout("12\n");

    pocketcalc()
        .arg("--results")
        .arg(&results)
        .args(["eval", "1 / 0 ="])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&results).unwrap(), "4\n12\nErreur\n");
}

// ============================================================================
// REPL Tests
// ============================================================================

#[test]
fn test_repl_prints_after_each_line() {
    pocketcalc()
        .arg("repl")
        .write_stdin("12 +\n30 =\nquit\n99\n")
        .assert()
        .success()
        .stdout("12 + \n42\n");
}

#[test]
fn test_repl_reports_bad_line_and_continues() {
    pocketcalc()
        .arg("repl")
        .write_stdin("5 *\n2 ?\n2 =\n")
        .assert()
        .success()
        .stdout("5 * \n10\n")
        .stderr(predicate::str::contains("unknown key '?'"));
}

#[test]
fn test_repl_saves_state_at_eof() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("calc.json");

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .arg("repl")
        .write_stdin("8 -\n")
        .assert()
        .success();

    pocketcalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "10 ="])
        .assert()
        .success()
        .stdout("-2\n");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_shows_width() {
    pocketcalc()
        .args(["--width", "16", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 16"));
}
