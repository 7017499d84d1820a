//! Integration tests for the najia binary.
//!
//! Each test runs the real binary with HOME and XDG_CONFIG_HOME pointed at a
//! temporary directory, so no user configuration leaks in.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// An isolated environment for running najia.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A najia command isolated from the user's configuration.
    fn najia(&self) -> Command {
        let mut cmd = Command::cargo_bin("najia").unwrap();
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env_remove("NAJIA_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `~/.najia/config.toml`.
    fn write_config(&self, contents: &str) {
        let dir = self.path().join(".najia");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }

    /// Write a catalogue document and return its path.
    fn write_catalog(&self, name: &str, contents: &str) -> String {
        let path = self.path().join(name);
        fs::write(&path, contents).unwrap();
        path.display().to_string()
    }
}

/// A catalogue with 天風姤 but without its pure hexagram 乾為天.
const GOU_ONLY: &str = r#"{
    "line_order": "bottom_to_top",
    "hexagrams": [
        {"id": 44, "name": "姤", "full_name": "天風姤", "upper": "乾", "lower": "巽",
         "palace": "乾", "shi": 1, "ying": 4, "flags": [],
         "branches": ["丑", "亥", "酉", "午", "申", "戌"]}
    ]
}"#;

// =============================================================================
// show
// =============================================================================

#[test]
fn show_prints_lines_top_down() {
    let env = TestEnv::new();
    env.najia()
        .args(["show", "44"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#44 天風姤 (姤)  palace 乾 金"))
        .stdout(predicate::str::contains("2  ⚊  亥水 子孫      伏 寅木 妻財"))
        .stdout(predicate::str::contains("1  ⚋  丑土 父母  世"));
}

#[test]
fn show_json() {
    let env = TestEnv::new();
    let output = env.najia().args(["show", "33", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], 33);
    assert_eq!(json["full_name"], "天山遯");
    assert_eq!(json["lines"].as_array().unwrap().len(), 6);
    assert_eq!(json["lines"][0]["hidden_spirit"]["branch"], "子");
    assert_eq!(json["lines"][0]["hidden_spirit"]["relative"], "子孫");
    assert_eq!(json["lines"][1]["hidden_spirit"]["branch"], "寅");
}

#[test]
fn show_unknown_id_fails() {
    let env = TestEnv::new();
    env.najia()
        .args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexagram 0 not found"));
    env.najia().args(["show", "65"]).assert().failure();
}

#[test]
fn config_selects_json_output() {
    let env = TestEnv::new();
    env.write_config("[output]\nformat = \"json\"\n");
    env.najia()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"full_name\": \"乾為天\""));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("integrity = \"sometimes\"\n");
    env.najia()
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integrity"));
}

// =============================================================================
// Replacement catalogues and integrity policy
// =============================================================================

#[test]
fn missing_pure_hexagram_warns_by_default() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("gou.json", GOU_ONLY);
    env.najia()
        .args(["--catalog", &catalog, "show", "44"])
        .assert()
        .success()
        .stdout(predicate::str::contains("伏").not())
        .stderr(predicate::str::contains("乾為天"));
}

#[test]
fn missing_pure_hexagram_fails_when_strict() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("gou.json", GOU_ONLY);
    env.najia()
        .args(["--catalog", &catalog, "--strict", "show", "44"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pure hexagram"));
}

#[test]
fn strict_from_config() {
    let env = TestEnv::new();
    env.write_catalog("gou.json", GOU_ONLY);
    env.write_config("catalog = \"../gou.json\"\nintegrity = \"strict\"\n");
    env.najia().args(["show", "44"]).assert().failure();
}

#[test]
fn unreadable_catalog_fails() {
    let env = TestEnv::new();
    env.najia()
        .args(["--catalog", "/nonexistent/najia.json", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalogue"));
}

// =============================================================================
// list, verify, completion
// =============================================================================

#[test]
fn list_all() {
    let env = TestEnv::new();
    let output = env.najia().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 64);
    assert!(stdout.lines().next().unwrap().contains("乾為天"));
}

#[test]
fn list_palace_in_generation_order() {
    let env = TestEnv::new();
    let output = env.najia().args(["list", "--palace", "乾"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<_> = stdout.lines().collect();
    assert_eq!(rows.len(), 8);
    assert!(rows[0].contains("乾為天"));
    assert!(rows[1].contains("天風姤"));
    assert!(rows[7].contains("火天大有"));
}

#[test]
fn verify_builtin_succeeds() {
    let env = TestEnv::new();
    env.najia()
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 64 hexagrams verified"));
}

#[test]
fn verify_reports_findings() {
    let env = TestEnv::new();
    let broken = GOU_ONLY.replace(r#""shi": 1"#, r#""shi": 2"#);
    let catalog = env.write_catalog("broken.json", &broken);
    env.najia()
        .args(["--catalog", &catalog, "verify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("self line is 2, expected 1"))
        .stderr(predicate::str::contains("no pure hexagram"));
}

#[test]
fn completion_generates_script() {
    let env = TestEnv::new();
    env.najia()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("najia"));
}

#[test]
fn version_flag_works() {
    let env = TestEnv::new();
    env.najia()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("najia"));
}
