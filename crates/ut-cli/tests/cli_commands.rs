//! CLI integration tests.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHIPPED_TABLE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/universal_table.json"
);

/// Create a temp directory holding a table document with the given body.
fn table_dir(body: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("table.json"), body).unwrap();
    dir
}

/// A `ut <command>` invocation reading the shipped table.
fn ut(command: &str) -> Command {
    let mut cmd = Command::cargo_bin("ut").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("UT_TABLE_FILE")
        .env_remove("UT_TABLE_NAME")
        .arg(command)
        .args(["--table-file", SHIPPED_TABLE]);
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_shipped_table() {
    ut("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("18 ranks, 17 effects"));
}

#[test]
fn check_missing_file() {
    Command::cargo_bin("ut")
        .unwrap()
        .args(["check", "--table-file", "/nonexistent/table.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn check_wrong_table_name() {
    ut("check")
        .args(["--table-name", "Other Table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Other Table"));
}

#[test]
fn check_rejects_unordered_thresholds() {
    let dir = table_dir(
        r#"{
  "Universal Table": {
    "Rank": {
      "Odd": { "Abbreviation": "Od", "Minimum": 1, "Standard": 2, "Green": 80, "Yellow": 50, "Red": 90 }
    },
    "Effect": {}
  }
}"#,
    );
    Command::cargo_bin("ut")
        .unwrap()
        .arg("check")
        .arg("-t")
        .arg(dir.path().join("table.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("green <= yellow <= red"));
}

#[test]
fn check_reads_table_file_from_env() {
    let dir = table_dir(
        r#"{
  "Tiny": {
    "Rank": {
      "Only": { "Abbreviation": "On", "Minimum": 0, "Standard": 1, "Green": 40, "Yellow": 70, "Red": 95 }
    },
    "Effect": {}
  }
}"#,
    );
    Command::cargo_bin("ut")
        .unwrap()
        .arg("check")
        .env("UT_TABLE_FILE", dir.path().join("table.json"))
        .env("UT_TABLE_NAME", "Tiny")
        .assert()
        .success()
        .stdout(predicate::str::contains("'Tiny'"))
        .stdout(predicate::str::contains("1 ranks, 0 effects"));
}

// ---------------------------------------------------------------------------
// ranks / effects
// ---------------------------------------------------------------------------

#[test]
fn ranks_lists_in_order() {
    let output = ut("ranks").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let feeble = stdout.find("Feeble").unwrap();
    let remarkable = stdout.find("Remarkable").unwrap();
    let beyond = stdout.find("Beyond").unwrap();
    assert!(feeble < remarkable && remarkable < beyond);
    assert!(stdout.contains("18 ranks"));
}

#[test]
fn effects_lists_columns() {
    ut("effects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grappling"))
        .stdout(predicate::str::contains("Strength"))
        .stdout(predicate::str::contains("17 effects"));
}

#[test]
fn effect_text_by_abbreviation() {
    ut("effect")
        .args(["Gp", "yellow"])
        .assert()
        .success()
        .stdout("Partial\n");
}

#[test]
fn effect_rejects_unknown_color() {
    ut("effect")
        .args(["Grappling", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color result: purple"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_with_fixed_value() {
    ut("roll")
        .args(["Rm", "--roll", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remarkable (30)"))
        .stdout(predicate::str::contains("Yellow"));
}

#[test]
fn roll_json_output() {
    let output = ut("roll")
        .args(["Good", "--roll", "80", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["roll"], 80);
    assert_eq!(value["rank"], "Good");
    assert_eq!(value["number"], 10);
    assert_eq!(value["result"], "Yellow");
    assert!(value.get("required").is_none());
}

#[test]
fn roll_with_negative_shift_and_intensity() {
    let output = ut("roll")
        .args([
            "In",
            "--roll",
            "70",
            "--shift",
            "-1",
            "--intensity",
            "Rm",
            "--effect",
            "Grappling",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rank"], "Remarkable");
    assert_eq!(value["number"], 30);
    assert_eq!(value["result"], "Yellow");
    assert_eq!(value["required"], "Yellow");
    assert_eq!(value["success"], true);
    assert_eq!(value["column"], "Grappling");
    assert_eq!(value["effect"], "Partial");
}

#[test]
fn roll_seed_is_reproducible() {
    let run = || {
        ut("roll")
            .args(["Ex", "--seed", "42", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let roll = value["roll"].as_u64().unwrap();
    assert!((1..=100).contains(&roll));
}

#[test]
fn roll_out_of_range() {
    ut("roll")
        .args(["Good", "--roll", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 1..=100"));
}

#[test]
fn roll_unknown_rank() {
    ut("roll")
        .args(["Cosmic", "--roll", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rank: Cosmic"));
}

#[test]
fn roll_accepts_shift_notation() {
    let output = ut("roll")
        .args([
            "Gd",
            "--roll",
            "45",
            "--shift",
            "cs+1",
            "--intensity",
            "Ex",
            "--intensity-shift",
            "cs-1",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rank"], "Excellent");
    assert_eq!(value["number"], 20);
    assert_eq!(value["result"], "Green");
    assert_eq!(value["required"], "Green");
    assert_eq!(value["success"], true);
}

#[test]
fn roll_shift_without_digits_is_zero() {
    let output = ut("roll")
        .args(["Good", "--roll", "80", "--shift", "none", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rank"], "Good");
    assert_eq!(value["number"], 10);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn subcommand_help_keeps_its_summary() {
    ut("check")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load and validate the table document"))
        .stdout(predicate::str::contains("--table-file"))
        .stdout(predicate::str::contains("--table-name"));
}
