//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("ticklist").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("to-do list"));
}

#[test]
fn test_serve_help_shows_flags() {
    let mut cmd = Command::cargo_bin("ticklist").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("Address to bind"))
        .stdout(predicate::str::contains("Database file"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("ticklist").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ticklist"));
}
