//! Checks on finished `pgpdrop` runs.

use std::process::Output;

use predicates::prelude::*;

fn report(output: &Output) -> String {
    format!(
        "exit: {:?}\n--- stdout\n{}\n--- stderr\n{}",
        output.status.code(),
        stdout(output),
        stderr(output)
    )
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(output.status.success(), "pgpdrop failed\n{}", report(output));
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "pgpdrop should have failed\n{}",
        report(output)
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    assert!(
        predicate::str::contains(expected).eval(&stdout(output)),
        "no {:?} on stdout\n{}",
        expected,
        report(output)
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    assert!(
        predicate::str::contains(expected).eval(&stderr(output)),
        "no {:?} on stderr\n{}",
        expected,
        report(output)
    );
}
