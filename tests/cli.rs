use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cmd() -> Command {
    Command::cargo_bin("nb").unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_the_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("log"))
        .stdout(predicate::str::contains("open"));
}

#[test]
fn version_flag_reports_the_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_is_rejected() {
    cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn log_edit_date_flags_are_mutually_exclusive() {
    cmd()
        .args(["log", "edit", "--yesterday", "--tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
