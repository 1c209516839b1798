//! CLI integration tests for the non-interactive commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, extra: &str) {
    let config = format!(
        "users:\n  - alice\n  - bob\njson_output:\n  enable: true\n  name: expenses.json\n{}",
        extra
    );
    std::fs::write(dir.path().join("config.yml"), config).unwrap();
}

fn split_ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("split-ledger").unwrap();
    cmd.env("SPLIT_LEDGER_DATA_DIR", dir.path());
    cmd
}

const SAMPLE_LEDGER: &str = r#"{
  "2024": {
    "Jan": {
      "alice_income": 2000.0,
      "alice_personal_exp": 50.0,
      "alice_shared_exp": 300.0,
      "bob_income": 1000.0,
      "bob_personal_exp": 25.0,
      "bob_shared_exp": 150.0
    }
  }
}"#;

#[test]
fn config_command_shows_users_and_paths() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "");

    split_ledger(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice and bob"))
        .stdout(predicate::str::contains("expenses.json"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();

    split_ledger(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.yml"));
}

#[test]
fn show_prints_the_plain_ledger() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "  encrypt: false\n");
    std::fs::write(dir.path().join("expenses.json"), SAMPLE_LEDGER).unwrap();

    split_ledger(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024\""))
        .stdout(predicate::str::contains("alice_income"));
}

#[test]
fn show_without_a_stored_ledger_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "  encrypt: false\n");

    split_ledger(&dir)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ledger file not found"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "  encrypt: false\n");
    std::fs::write(dir.path().join("expenses.json"), SAMPLE_LEDGER).unwrap();

    split_ledger(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "year,month,alice_income,alice_shared_exp,alice_personal_exp",
        ))
        .stdout(predicate::str::contains("2024,Jan,2000.00,300.00,50.00"));
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "  encrypt: false\n");
    std::fs::write(dir.path().join("expenses.json"), SAMPLE_LEDGER).unwrap();
    let out_path = dir.path().join("export.json");

    split_ledger(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out_path)
        .assert()
        .success();

    let exported = std::fs::read_to_string(&out_path).unwrap();
    assert!(exported.contains("bob_shared_exp"));
}

#[test]
fn corrupted_plain_ledger_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "  encrypt: false\n");
    std::fs::write(dir.path().join("expenses.json"), "not json at all").unwrap();

    split_ledger(&dir).arg("show").assert().failure();
}
