//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("compare") && out.contains("list"));
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("dev").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_compare_requires_two_stores() {
    let t = Test::new();
    let dev = t.store_dir("dev", &[]);

    let output = t.cmd().arg("compare").arg(&dev).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "vaultdiff");
}

#[test]
fn test_error_exit_code_is_one() {
    let t = Test::new();

    let output = t.list(t.dir.path().join("missing"));
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "✗");
}

#[test]
fn test_empty_locator_fails() {
    let t = Test::new();

    let output = t.cmd().args(["list", ""]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid store locator");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_vaultdiff") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "#compdef");
}

#[test]
fn test_missing_store_shows_hint() {
    let t = Test::new();

    t.cmd()
        .args(["list", "missing-store"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot list secrets in missing-store"))
        .stderr(predicate::str::contains("check the store path"));
}
