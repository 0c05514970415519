//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pgpdrop"))
        .stdout(predicate::str::contains("files"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("decrypt").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_key_source_hints() {
    let t = Test::new();
    t.file("doc.txt", b"x");

    let output = t.cmd().args(["files", "doc.txt"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no key loaded");
    assert_stderr_contains(&output, "--key");
}

#[test]
fn test_files_requires_inputs() {
    let t = Test::new();

    let output = t.cmd().arg("files").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_explicit_config_missing() {
    let t = Test::new();
    let key = t.key_file();

    let output = t
        .cmd()
        .args(["text", "--stdout", "hi", "--config", "missing.toml", "--key"])
        .arg(&key)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "pgpdrop");
}
