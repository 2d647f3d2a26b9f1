//! CLI smoke tests — verify basic binary behavior.

use std::io::Write;
use std::process::{Command, Stdio};

const LEXICON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/emotions.json");

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sentiscope"));
    cmd.env_remove("RUST_LOG").env_remove("SENTISCOPE_LEXICON");
    cmd
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Expected usage info in --help output");
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sentiscope"), "Expected binary name in --version output");
}

#[test]
fn test_analyze_prints_json() {
    let output = cli_bin()
        .args(["--lexicon", LEXICON, "analyze", "--compact", "I am furious and angry. I am happy!"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1);
    let doc: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(doc["emotions"]["Anger"].as_f64().unwrap() > 0.0);
    assert_eq!(doc["sentence_breakdown"].as_array().unwrap().len(), 2);
}

#[test]
fn test_analyze_reads_stdin() {
    let mut child = cli_bin()
        .args(["--lexicon", LEXICON, "analyze"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"I am so afraid of the ghost.")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["text"], "I am so afraid of the ghost.");
    assert_eq!(doc["emotions"]["Fear"], 100.0);
}

#[test]
fn test_missing_config_and_lexicon_do_not_fail() {
    let output = cli_bin()
        .args([
            "--config",
            "/tmp/nonexistent_sentiscope_config_12345.toml",
            "--lexicon",
            "/tmp/nonexistent_sentiscope_lexicon_12345.json",
            "analyze",
            "",
        ])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["sentiment"], "Neutral");
    assert!(doc["emotions"].as_object().unwrap().is_empty());
    assert!(doc["sentence_breakdown"].as_array().unwrap().is_empty());
}

#[test]
fn test_missing_config_is_logged() {
    let output = cli_bin()
        .env("RUST_LOG", "info")
        .args([
            "--config",
            "/tmp/nonexistent_sentiscope_config_12345.toml",
            "--lexicon",
            LEXICON,
            "analyze",
            "hello",
        ])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using defaults"), "stderr was: {}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("using defaults"));
}

#[test]
fn test_config_file_sets_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sentiscope.toml");
    std::fs::write(&config_path, format!("[lexicon]\npath = {:?}\n", LEXICON)).unwrap();

    let output = cli_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["analyze", "so excited"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["emotions"]["Excitement"], 100.0);
}
