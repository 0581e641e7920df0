use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bankapi(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bankapi").unwrap();
    cmd.env("BANKAPI_DB_PATH", temp_dir.path().join("cli.db")).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("bankapi").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("REST API for bank clients and their accounts"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("bankapi").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_clients_on_fresh_database() {
    let temp_dir = TempDir::new().unwrap();
    bankapi(&temp_dir).arg("clients").assert().success().stdout(predicate::str::contains("[]"));
    assert!(temp_dir.path().join("cli.db").exists());
}

#[test]
fn test_db_flag_overrides_env() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("nested").join("explicit.db");
    bankapi(&temp_dir).arg("--db").arg(&explicit).arg("clients").assert().success();
    assert!(explicit.exists());
}

#[test]
fn test_accounts_unknown_client() {
    let temp_dir = TempDir::new().unwrap();
    bankapi(&temp_dir)
        .args(["accounts", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't find a client with that id. Id provided: 3"));
}

#[test]
fn test_accounts_non_numeric_client() {
    let temp_dir = TempDir::new().unwrap();
    bankapi(&temp_dir)
        .args(["accounts", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client id must be an int. User Provided: abc"));
}
