// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Integration tests for the pagectl binary.

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn pagectl() -> Command {
    let mut cmd = Command::cargo_bin("pagectl").unwrap();
    cmd.env_remove("PAGECTL_CONFIG").env_remove("PAGECTL_CAPTURE");
    cmd
}

fn write_config(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn ninety_five_items() {
    pagectl()
        .args(["--total", "95"])
        .assert()
        .success()
        .stdout("page 1/10 size 10 [(1) 2 3 4 5 6 7 8 9 10] next\n");
}

#[test]
fn centered_window() {
    pagectl()
        .args(["--total", "250", "--default-current", "15"])
        .assert()
        .success()
        .stdout("page 15/25 size 10 [10 11 12 13 14 (15) 16 17 18 19] prev next\n");
}

#[test]
fn no_items() {
    pagectl()
        .args(["--total", "0", "next", "prev"])
        .assert()
        .success()
        .stdout("page 0/0 size 10 [-]\npage 0/0 size 10 [-]\npage 0/0 size 10 [-]\n")
        .stderr(predicate::str::contains("onChange").not());
}

#[rstest]
#[case("goto=99", "page 25/25")]
#[case("goto=-5", "page 1/25")]
#[case("goto=0", "page 1/25")]
#[case("goto=12", "page 12/25")]
fn goto_clamps(#[case] action: &str, #[case] expected: &str) {
    let output = pagectl()
        .args(["--total", "250", "--default-current", "7", action])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.lines().last().unwrap();
    assert!(last.starts_with(expected), "{last}");
}

#[test]
fn navigation_echoes_change_notifications() {
    pagectl()
        .args(["--total", "250", "next", "next", "goto=2"])
        .assert()
        .success()
        .stderr("onChange(2, 10)\nonChange(3, 10)\nonChange(2, 10)\n");
}

#[test]
fn requesting_current_page_is_silent() {
    pagectl()
        .args(["--total", "250", "--default-current", "4", "goto=4"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn controlled_without_listener_warns() {
    pagectl()
        .args(["--total", "250", "--current", "3", "--read-only", "next"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:").and(predicate::str::contains("read-only")))
        .stdout(predicate::str::contains("page 3/25").count(2));
}

#[test]
fn controlled_waits_for_confirmation() {
    pagectl()
        .args(["--total", "250", "--current", "3", "next", "current=4"])
        .assert()
        .success()
        .stderr("onChange(4, 10)\n")
        .stdout(
            "page 3/25 size 10 [1 2 (3) 4 5 6 7 8 9 10] prev next\n\
             page 3/25 size 10 [1 2 (3) 4 5 6 7 8 9 10] prev next\n\
             page 4/25 size 10 [1 2 3 (4) 5 6 7 8 9 10] prev next\n",
        );
}

#[test]
fn reconfiguration_clamps_silently() {
    pagectl()
        .args(["--total", "250", "--default-current", "20", "total=30"])
        .assert()
        .success()
        .stderr("")
        .stdout(predicate::str::ends_with("page 3/3 size 10 [1 2 (3)] prev\n"));
}

#[test]
fn json_output() {
    let output = pagectl()
        .args(["--total", "250", "--default-current", "2", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["current_page"], 2);
    assert_eq!(view["window"]["kind"], "populated");
    assert_eq!(view["prev"]["visible"], true);
}

#[test]
fn config_file() {
    let config = write_config("total = 250\ndefault_current = 21\nsimple = true\n", ".toml");
    pagectl()
        .args(["--config", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("page 21/25 size 10 [page 21] prev next\n");
}

#[test]
fn json_config_file() {
    let config = write_config(r#"{"total": 40, "page_size": 20}"#, ".json");
    pagectl()
        .args(["--config", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("page 1/2 size 20 [(1) 2] next\n");
}

#[test]
fn invalid_config_file_fails() {
    let config = write_config("total = \"many\"\n", ".toml");
    pagectl()
        .args(["--config", config.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to parse TOML"));
}

#[test]
fn invalid_window_fails() {
    pagectl()
        .args(["--window-size", "4", "--buffer-size", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid window"));
}

#[test]
fn unknown_action_fails() {
    pagectl()
        .args(["--total", "10", "jump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action 'jump'"));
}

#[test]
fn capture_file_records_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("changes.jsonl");

    pagectl()
        .args(["--total", "250", "--capture", path.to_str().unwrap()])
        .args(["next", "goto=30", "prev"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    let pages: Vec<u64> = content
        .lines()
        .map(|line| {
            let change: serde_json::Value = serde_json::from_str(line).unwrap();
            change["page"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(pages, vec![2, 25, 24]);
}

#[test]
fn disabled_still_notifies_direct_requests() {
    pagectl()
        .args(["--total", "250", "--disabled", "goto=5"])
        .assert()
        .success()
        .stderr("onChange(5, 10)\n")
        .stdout(predicate::str::ends_with(
            "page 5/25 size 10 [1 2 3 4 (5) 6 7 8 9 10] disabled\n",
        ));
}
