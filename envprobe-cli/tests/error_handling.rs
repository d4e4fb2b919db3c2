//! Integration tests for CLI error handling and stream discipline.
//!
//! These tests pin down the exit code contract and verify that errors land
//! on stderr while stdout stays clean for command substitution.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Argument Errors (clap)
// ============================================================================

#[test]
fn test_unknown_subcommand_exits_two() {
    let env = TestEnv::new();
    env.command()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_unknown_flag_exits_two() {
    let env = TestEnv::new();
    env.command()
        .arg("exe")
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_required_argument_exits_two() {
    let env = TestEnv::new();
    env.command().arg("env").assert().failure().code(2);
    env.command().arg("which").assert().failure().code(2);
    env.command().arg("resolve").assert().failure().code(2);
}

#[test]
fn test_bad_format_value_exits_two() {
    let env = TestEnv::new();
    env.command()
        .arg("report")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .code(2);
}

// ============================================================================
// Stream Discipline
// ============================================================================

#[test]
fn test_errors_go_to_stderr_and_stdout_stays_empty() {
    let env = TestEnv::new();
    env.command()
        .env_remove("PROBE_TEST_VAR")
        .arg("env")
        .arg("PROBE_TEST_VAR")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_single_value_stdout_is_bare_even_when_verbose() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("PROBE_TEST_VAR", "plain")
        .arg("--verbose")
        .arg("env")
        .arg("PROBE_TEST_VAR")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "plain\n");
}

#[test]
fn test_quiet_does_not_suppress_values() {
    let env = TestEnv::new();
    env.command()
        .env("PROBE_TEST_VAR", "still here")
        .arg("--quiet")
        .arg("env")
        .arg("PROBE_TEST_VAR")
        .assert()
        .success()
        .stdout("still here\n");
}

// ============================================================================
// Global Flag Positions
// ============================================================================

#[test]
fn test_global_flags_work_before_and_after_subcommand() {
    let env = TestEnv::new();

    env.command()
        .arg("--verbose")
        .arg("cwd")
        .assert()
        .success();

    env.command()
        .arg("cwd")
        .arg("--verbose")
        .assert()
        .success();
}
