// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Integration Tests
//!
//! Runs the `vauchi-pin` binary against the certificate fixtures of
//! vauchi-pinning.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const LEAF_PIN: &str = "kZ/hOcxZy/MaaRzqOWMDOKu74d5u05oM4U2/j+UgkZk=";
const ROOT_PIN: &str = "8o7piIunFqGN6vcoYsryZu+vQLNZIjhPgzHmKMJ61Rg=";
const UNRELATED_PIN: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../vauchi-pinning/tests/fixtures")
        .join(name)
}

/// Run the CLI with a clean pin-config environment.
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vauchi-pin"))
        .env_remove("VAUCHI_PINS_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_hash_prints_chain_pins_in_order() {
    let chain = fixture("relay_chain.pem");
    let output = run(&["hash", chain.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let leaf_at = out.find(LEAF_PIN).expect("leaf pin printed");
    let root_at = out.find(ROOT_PIN).expect("root pin printed");
    assert!(leaf_at < root_at);
    assert!(out.contains("CN=relay.vauchi.test"));
}

#[test]
fn test_hash_der_file() {
    let der = fixture("relay_leaf.der");
    let output = run(&["hash", der.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(LEAF_PIN));
}

#[test]
fn test_hash_invalid_certificate_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.der");
    std::fs::write(&path, b"not a certificate").unwrap();

    let output = run(&["hash", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to get public key"));
}

#[test]
fn test_hash_empty_file_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pem");
    std::fs::write(&path, b"").unwrap();

    let output = run(&["hash", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("No certificates in"));
}

#[test]
fn test_check_empty_file_rejected_as_no_certificates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.der");
    std::fs::write(&path, b"").unwrap();

    let output = run(&["check", path.to_str().unwrap(), "--pin", LEAF_PIN]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("rejected: no certificates from server"));
}

#[test]
fn test_check_accepts_pinned_root() {
    let chain = fixture("relay_chain.pem");
    let output = run(&["check", chain.to_str().unwrap(), "--pin", ROOT_PIN]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("accepted"));
}

#[test]
fn test_check_rejects_unpinned_chain() {
    let chain = fixture("relay_chain.pem");
    let output = run(&["check", chain.to_str().unwrap(), "--pin", UNRELATED_PIN]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("rejected: received wrong certificate"));
}

#[test]
fn test_check_empty_file_reports_no_certificates() {
    let key_only = fixture("relay_leaf.key");
    let output = run(&["check", key_only.to_str().unwrap(), "--pin", LEAF_PIN]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("rejected: no certificates from server"));
}

#[test]
fn test_check_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("pins.json");
    std::fs::write(
        &config,
        format!(r#"{{ "pinned_key_hashes": ["{}"] }}"#, LEAF_PIN),
    )
    .unwrap();
    let chain = fixture("relay_chain.pem");

    let output = run(&[
        "check",
        chain.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_check_warns_about_malformed_pins() {
    let chain = fixture("relay_chain.pem");
    let output = run(&["check", chain.to_str().unwrap(), "--pin", "AAAA"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("will never match"));
}

#[test]
fn test_check_missing_config_is_an_error() {
    let chain = fixture("relay_chain.pem");
    let output = run(&[
        "check",
        chain.to_str().unwrap(),
        "--config",
        "/nonexistent/pins.json",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load pin config"));
}
