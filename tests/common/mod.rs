//! Shared fixtures and command helpers for the integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused)]
pub const SIMPLE_MANIFEST: &str =
    "[package]\nname = \"x\"\nversion = \"1.0.0\"\n[dependencies]\nfoo = \"2.0.0\"\n";

#[allow(unused)]
pub const CARGO_MANIFEST: &str = r#"# Release tooling bumps the version below.
[package]
name = "desktop-app"
version = "0.3.1"
description = "A desktop app"
edition = "2021"

[build-dependencies]
tauri-build = { version = "1.5", features = [] }

[dependencies]
serde = { version = "1.0", features = ["derive"] }
tauri = { version = "1.5", features = ["shell-open"] }

[features]
custom-protocol = ["tauri/custom-protocol"]
"#;

#[allow(unused)]
pub const TAURI_CONFIG: &str = r#"{
  "build": {
    "beforeDevCommand": "npm run dev",
    "devPath": "http://localhost:1420",
    "distDir": "../dist"
  },
  "package": {
    "productName": "desktop-app"
  },
  "version": "0.3.1",
  "tauri": {
    "bundle": {
      "active": true,
      "targets": "all",
      "identifier": "com.example.app"
    }
  }
}
"#;

/// Writes `content` into a fresh temp dir and returns both.
pub fn fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Runs `update-manifest-version`
#[allow(unused)]
pub fn run_manifest(new_version: &str, path: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-manifest-version");
    cmd.arg(new_version)
        .arg(path)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");

    cmd.assert()
}

/// Runs `update-manifest-version-unconditional`
#[allow(unused)]
pub fn run_unconditional(
    new_version: &str,
    path: &Path,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-manifest-version-unconditional");
    cmd.arg(new_version)
        .arg(path)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");

    cmd.assert()
}

/// Runs `update-json-config-version`
#[allow(unused)]
pub fn run_json_config(
    new_version: &str,
    path: &Path,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-json-config-version");
    cmd.arg(new_version)
        .arg(path)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");

    cmd.assert()
}
