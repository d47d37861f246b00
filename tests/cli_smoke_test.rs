//! Binary smoke tests that need no network

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn interactif() -> Command {
    let mut cmd = Command::cargo_bin("interactif").unwrap();
    cmd.env_remove("INTERACTIF_SERVICE_URL")
        .env_remove("INTERACTIF_STRUCTURED_URL")
        .env_remove("INTERACTIF_ASSISTANT_URL")
        .env("INTERACTIF_COLOR", "off");
    cmd
}

#[test]
fn test_help_lists_commands() {
    interactif()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("directory"));
}

#[test]
fn test_directory_prints_employees() {
    interactif()
        .arg("directory")
        .assert()
        .success()
        .stdout(predicate::str::contains("TechCorp Industries"))
        .stdout(predicate::str::contains("Sarah Chen"));
}

#[test]
fn test_directory_placeholder_tab() {
    interactif()
        .args(["directory", "--tab", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Active projects and initiatives will be displayed here.",
        ));
}

#[test]
fn test_directory_unknown_tab_fails() {
    interactif()
        .args(["directory", "--tab", "payroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tab"));
}

#[test]
fn test_blank_ask_fails_before_any_request() {
    interactif()
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let (_temp_dir, config_path) =
        common::temp_config_file("service:\n  timeout_seconds: 0\nchat:\n  max_prompt_chars: 10\n");

    interactif()
        .arg("--config")
        .arg(config_path)
        .arg("directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_seconds"));
}
