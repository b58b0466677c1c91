//! CLI end-to-end tests for the `monkey` driver binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

#[test]
fn evaluates_a_source_file_and_prints_the_result() {
    let mut cmd = Command::cargo_bin("monkey").unwrap();
    cmd.arg(fixtures_dir().join("fibonacci.monkey"));
    cmd.assert().success().stdout(predicate::str::contains("610"));
}

#[test]
fn missing_file_is_a_read_error_not_a_panic() {
    let mut cmd = Command::cargo_bin("monkey").unwrap();
    cmd.arg(fixtures_dir().join("does-not-exist.monkey"));
    cmd.assert().failure().stderr(predicate::str::contains("could not read source file"));
}
