//! Integration tests for the playstate CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixtures_dir, isolated_config};

/// playstate command with an empty config location and colors off.
fn playstate(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("playstate").expect("binary built");
    cmd.env("PLAYSTATE_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn oversized_width_is_usage_error() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["demo", "--width", "100000000000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn run_without_file_is_usage_error() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

// ============================================================================
// Replay Tests
// ============================================================================

#[test]
fn run_prints_positions() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["run", "--width", "4"])
        .arg(fixtures_dir().join("scenario.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("▶ track 1 ━⏺── 00:30/02:00"))
        .stdout(predicate::str::contains("⏸ track 1 ⏺─── 00:10/02:00"))
        .stdout(predicate::str::contains("00:20/02:00"));
}

#[test]
fn run_reports_rejections_and_continues() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .arg("run")
        .arg(fixtures_dir().join("rejected.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected: Cannot play: no track is loaded"))
        .stdout(predicate::str::contains("rejected: Cannot pause: playback is not running"));
}

#[test]
fn strict_run_fails_on_rejection() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["run", "--strict"])
        .arg(fixtures_dir().join("rejected.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Line 1: Cannot play"));
}

#[test]
fn malformed_script_fails() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .arg("run")
        .arg(fixtures_dir().join("malformed.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown command 'rewind'"));
}

#[test]
fn demo_json_is_valid() {
    let (_dir, config) = isolated_config();
    let output = playstate(&config)
        .args(["demo", "--json"])
        .output()
        .expect("Failed to execute playstate");
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 9);
    assert_eq!(reports[8]["outcome"], "position");
    assert_eq!(reports[8]["position"], 20.0);
    assert_eq!(reports[8]["state"]["interactions"], 5);
}

#[test]
fn config_from_file_sets_strict() {
    let (_dir, config) = isolated_config();
    std::fs::write(&config, "[player]\nstrict = true\n").unwrap();

    playstate(&config)
        .arg("run")
        .arg(fixtures_dir().join("rejected.txt"))
        .assert()
        .code(1);
}

// ============================================================================
// Config and Completions
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("progress_width = 40"))
        .stdout(predicate::str::contains("level = \"warn\""));
}

#[test]
fn config_init_writes_file_once() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(config.exists());

    playstate(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let (_dir, config) = isolated_config();
    playstate(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playstate"));
}
