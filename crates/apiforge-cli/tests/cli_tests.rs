//! Integration tests for the apiforge binary.
//!
//! These stop before the pipeline runs — a real run would shell out to
//! `go`/`docker`/`migrate`/`sqlc`. Pipeline behavior is covered in
//! `apiforge-adapters/tests/pipeline_tests.rs` with scripted doubles.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn apiforge() -> Command {
    Command::cargo_bin("apiforge").unwrap()
}

#[test]
fn help_lists_generate_command() {
    apiforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_crate() {
    apiforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_without_name_is_a_usage_error() {
    apiforge().arg("generate").assert().failure().code(2);
}

#[test]
fn generate_rejects_path_separators_in_name() {
    let temp = TempDir::new().unwrap();
    apiforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "bad/name", "--defaults"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"));
}

#[test]
fn generate_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("existing-svc")).unwrap();

    apiforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "existing-svc", "--defaults"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_emit_shell_script() {
    apiforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apiforge"));
}
