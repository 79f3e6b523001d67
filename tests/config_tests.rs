//! Integration tests for storage and diagnostics configuration

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::habitlog_cmd;

#[test]
fn test_env_overrides_storage_and_log_paths() {
    let temp = TempDir::new().unwrap();

    habitlog_cmd(temp.path())
        .env("HABITLOG_FILE", "data/mine.json")
        .env("HABITLOG_LOG", "logs/diag.log")
        .write_stdin("Ada\nread\nexit\n")
        .assert()
        .success();

    assert!(temp.path().join("data/mine.json").exists());
    assert!(temp.path().join("logs/diag.log").exists());
    assert!(!temp.path().join("habit_log.json").exists());
    assert!(!temp.path().join("habitlog.log").exists());
}

#[test]
fn test_empty_storage_env_keeps_log_in_memory() {
    let temp = TempDir::new().unwrap();

    habitlog_cmd(temp.path())
        .env("HABITLOG_FILE", "")
        .write_stdin("Ada\nread\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔹 Read at "));

    assert!(!temp.path().join("habit_log.json").exists());
}

#[test]
fn test_local_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("habitlog.toml"),
        "data_file = \"habits.json\"\nlog_file = \"habits.log\"\n",
    )
    .unwrap();

    habitlog_cmd(temp.path())
        .write_stdin("Ada\nstudy\nexit\n")
        .assert()
        .success();

    assert!(temp.path().join("habits.json").exists());
    assert!(temp.path().join("habits.log").exists());
}

#[test]
fn test_config_disables_persistence() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("habitlog.toml"), "persist = false\n").unwrap();

    habitlog_cmd(temp.path())
        .write_stdin("Ada\nstudy\nexit\n")
        .assert()
        .success();

    assert!(!temp.path().join("habit_log.json").exists());
}

#[test]
fn test_malformed_config_fails_with_suggestions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("habitlog.toml"), "persist = maybe\n").unwrap();

    habitlog_cmd(temp.path())
        .write_stdin("Ada\nexit\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("Suggestions"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    habitlog_cmd(temp.path())
        .env("HABITLOG_CONFIG", "absent.toml")
        .write_stdin("Ada\nexit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_unusable_log_path_only_warns() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("logdir")).unwrap();

    habitlog_cmd(temp.path())
        .env("HABITLOG_LOG", "logdir")
        .write_stdin("Ada\nread\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("diagnostics disabled"));

    assert!(temp.path().join("habit_log.json").exists());
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    habitlog_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("habitlog"));
}
