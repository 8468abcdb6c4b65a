use assert_cmd::Command;
use predicates::str::contains;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".tradedash").join("config.json")
}

const BINARY_NAME: &str = "tradedash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Set-url command should persist the backend URL to the config file.
fn set_url_command_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-url")
        .arg("http://10.0.0.5:8000")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Saved backend URL"));

    // Confirm the file was created
    assert!(config_path.exists());
}

#[test]
/// Set-url command should reject URLs without an http(s) scheme.
fn set_url_command_rejects_invalid_url() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-url")
        .arg("not-a-url")
        .env("HOME", tmp.path())
        .assert()
        .failure();

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Clear command should delete an existing config file.
fn clear_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing dashboard configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
#[ignore] // This requires a running backend at the given URL.
fn health_command_reports_backend_state() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("health")
        .arg("--base-url")
        .arg("http://127.0.0.1:8000")
        .assert()
        .success()
        .stdout(contains("is healthy"));
}
