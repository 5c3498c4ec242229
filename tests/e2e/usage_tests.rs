//! End-to-end tests for argument validation and informational output
//!
//! None of these reach a package manager.

use super::FakeBackends;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_fails() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: unipkg <term>"))
        .stderr(predicate::str::contains("unipkg --help"));
    assert!(fakes.calls().is_empty());
}

#[test]
fn empty_first_argument_is_missing() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .arg("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: unipkg"));
}

#[test]
fn unknown_flag_first_fails() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown flag '--bogus'"))
        .stderr(predicate::str::contains("Usage: unipkg"));
}

#[test]
fn unknown_flag_anywhere_runs_nothing() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["-u", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown flag '-x'"));
    assert!(fakes.calls().is_empty());

    fakes
        .command()
        .args(["vim", "extra", "--nope"])
        .assert()
        .code(1);
    assert!(fakes.calls().is_empty());
}

#[test]
fn double_dash_is_an_unknown_flag() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["--", "firefox"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown flag '--'"))
        .stderr(predicate::str::contains("Usage: unipkg"));
    assert!(fakes.calls().is_empty());

    fakes
        .command()
        .args(["firefox", "--"])
        .assert()
        .code(1);
    assert!(fakes.calls().is_empty());
}

#[test]
fn short_and_long_help_match() {
    let fakes = FakeBackends::empty();
    let short = fakes.command().arg("-h").output().unwrap();
    let long = fakes.command().arg("--help").output().unwrap();

    assert!(short.status.success());
    assert!(long.status.success());
    assert_eq!(short.stdout, long.stdout);

    let help = String::from_utf8(long.stdout).unwrap();
    for flag in ["--check-update", "--upgrade-all", "-iy", "--remove-snap"] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn version_prints_name_and_version() {
    let fakes = FakeBackends::empty();
    fakes
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "unipkg {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn flag_without_package_prints_hint() {
    let fakes = FakeBackends::all();
    for flag in ["-i", "-iy", "-if", "-is", "-r", "-ry", "-rf", "-rs"] {
        fakes
            .command()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Usage: unipkg {flag} <package>")));
    }
    assert!(fakes.calls().is_empty());
}

#[test]
fn long_flag_without_package_echoes_long_form() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .arg("--install-flatpak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: unipkg --install-flatpak <package>"));
}

#[test]
fn completions_for_bash() {
    let fakes = FakeBackends::empty();
    fakes
        .command()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_unipkg"))
        .stdout(predicate::str::contains("--upgrade-all"));
}

#[test]
fn completions_for_unknown_shell_fail() {
    let fakes = FakeBackends::empty();
    fakes
        .command()
        .args(["--completions", "nosuchshell"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nosuchshell"));
}
