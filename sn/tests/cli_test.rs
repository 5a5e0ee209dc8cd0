//! Integration tests for the sn binary
//!
//! These drive the REPL through piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sn(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sn").expect("sn binary");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_shows_prompt_and_quits() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    sn(&temp)
        .args(["--maximum", "7"])
        .write_stdin("/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Secret number game"))
        .stdout(predicate::str::contains("Pick a number from 1 to 7"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_single_value_range_exhausts() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    sn(&temp)
        .args(["-m", "1"])
        .write_stdin("1\n/restart\n2\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You guessed the number in 1 attempt!"))
        .stdout(predicate::str::contains("Every possible number has already been drawn"));
}

#[test]
fn test_non_numeric_guess_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    sn(&temp)
        .args(["-m", "3"])
        .write_stdin("abc\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'abc' is not a whole number"));
}

#[test]
fn test_maximum_from_config_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = temp.path().join("sn.yml");
    std::fs::write(&config, "maximum: 42\n").expect("write config");

    sn(&temp)
        .arg("--config")
        .arg(&config)
        .write_stdin("/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick a number from 1 to 42"));
}

#[test]
fn test_zero_maximum_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    sn(&temp)
        .args(["--maximum", "0"])
        .write_stdin("/quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_unknown_log_level_falls_back() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    sn(&temp)
        .args(["--log-level", "loud"])
        .write_stdin("/quit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown log-level 'loud', defaulting to WARN"))
        .stdout(predicate::str::contains("Goodbye!"));
}
