//! End-to-end tests for the `descended-calc` binary.
//!
//! Each test points the binary at its own store file in a temp dir and
//! checks stdout plus the exit status across several runs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

// ── Helpers ────────────────────────────────────────────────────────────

fn calc(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_descended-calc"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ── Counters and results ───────────────────────────────────────────────

#[test]
fn set_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    let out = calc(&store, &["set", "T4_Abyssal", "2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "T4_Abyssal = 2");

    let out = calc(&store, &["results"]);
    assert!(out.status.success());
    assert!(stdout(&out).lines().any(|l| l.trim() == "4  Artefact"));
}

#[test]
fn set_clamps_and_parses_leading_digits() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    assert_eq!(stdout(&calc(&store, &["set", "T9_Cube", "5000"])).trim(), "T9_Cube = 999");
    assert_eq!(stdout(&calc(&store, &["set", "T9_Cube", "12abc"])).trim(), "T9_Cube = 12");
    assert_eq!(stdout(&calc(&store, &["add", "T9_Cube", "-20"])).trim(), "T9_Cube = 0");
}

#[test]
fn unknown_tier_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    let out = calc(&store, &["set", "T10_Dragon", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("T10_Dragon"));
}

#[test]
fn corrupt_store_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");
    std::fs::write(&store, [0xff; 9]).unwrap();

    let out = calc(&store, &["show"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[warning]"));
    assert!(dir.path().join("calc.store.corrupt").exists());

    let out = calc(&store, &["set", "T4_Abyssal", "2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "T4_Abyssal = 2");
    assert!(stdout(&calc(&store, &["results"]))
        .lines()
        .any(|l| l.trim() == "4  Artefact"));
}

#[test]
fn bad_arguments_exit_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = calc(&dir.path().join("calc.store"), &["fly"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

// ── Import / export ────────────────────────────────────────────────────

#[test]
fn save_selection_is_versioned_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");
    calc(&store, &["set", "T6_Giga", "3"]);

    let out = calc(&store, &["save-selection"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["selection"]["T6_Giga"], 3);
    assert!(value["timestamp"].as_u64().unwrap() > 0);
}

#[test]
fn malformed_import_keeps_selection() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");
    calc(&store, &["set", "T5_Chaos", "6"]);

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ nope").unwrap();
    let out = calc(&store, &["import", bad.to_str().unwrap()]);
    assert!(!out.status.success());

    let out = calc(&store, &["save-selection"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["selection"]["T5_Chaos"], 6);
}

#[test]
fn import_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    let mut child = Command::new(env!("CARGO_BIN_EXE_descended-calc"))
        .arg("--store")
        .arg(&store)
        .args(["import", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"version":1,"selection":{"T7_WGiga":4,"Bogus":1},"timestamp":0}"#)
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "1 counters imported.");

    let out = calc(&store, &["summary"]);
    assert!(stdout(&out).contains("Total quantity: 4"));
}

#[test]
fn export_formats() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");
    calc(&store, &["set", "T4_Abyssal", "2"]);

    let text = stdout(&calc(&store, &["export"]));
    assert!(text.starts_with("ARK: Primal Descended Calculator Results\n"));
    assert!(text.contains("Artefact: 4"));

    let csv = stdout(&calc(&store, &["export", "--format", "csv"]));
    assert!(csv.starts_with("Item,Quantity\n"));
    assert!(csv.contains("\"Artefact\",4"));
}

// ── Calculator types, history, theme ───────────────────────────────────

#[test]
fn type_switch_is_remembered() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    assert!(calc(&store, &["type", "key"]).status.success());
    calc(&store, &["set", "God_Key", "1"]);
    let sections = stdout(&calc(&store, &["sections"]));
    assert!(sections.starts_with("God Key x1"));

    // Boss tiers are not valid while the key calculator is active
    assert!(!calc(&store, &["set", "T4_Abyssal", "1"]).status.success());
    assert!(calc(&store, &["--type", "boss", "set", "T4_Abyssal", "1"]).status.success());
}

#[test]
fn history_push_and_restore() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    calc(&store, &["set", "T8_Ascension", "2"]);
    assert!(calc(&store, &["history", "push"]).status.success());
    calc(&store, &["reset"]);

    let list = stdout(&calc(&store, &["history"]));
    assert!(list.starts_with("[0] boss"));
    assert!(list.contains("T8_Ascension=2"));

    assert!(calc(&store, &["history", "restore", "0"]).status.success());
    assert!(!calc(&store, &["history", "restore", "5"]).status.success());
    let json = stdout(&calc(&store, &["save-selection"]));
    assert!(json.contains("\"T8_Ascension\": 2"));
}

#[test]
fn theme_toggle() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");

    assert_eq!(stdout(&calc(&store, &["theme"])).trim(), "dark");
    assert_eq!(stdout(&calc(&store, &["theme", "toggle"])).trim(), "light");
    assert_eq!(stdout(&calc(&store, &["theme"])).trim(), "light");
}

// ── Config and self-check ──────────────────────────────────────────────

#[test]
fn config_file_changes_limits() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("calc.store");
    let config = dir.path().join("calc.toml");
    std::fs::write(&config, "max_count = 50\n").unwrap();

    let out = calc(
        &store,
        &["--config", config.to_str().unwrap(), "set", "T9_Cube", "80"],
    );
    assert_eq!(stdout(&out).trim(), "T9_Cube = 50");
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("calc.toml");
    std::fs::write(&config, "min_count = 10\nmax_count = 5\n").unwrap();

    let out = calc(
        &dir.path().join("calc.store"),
        &["--config", config.to_str().unwrap(), "show"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid config"));
}

#[test]
fn check_passes() {
    let dir = tempfile::tempdir().unwrap();
    let out = calc(&dir.path().join("calc.store"), &["check"]);
    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("0 failed"));
}
