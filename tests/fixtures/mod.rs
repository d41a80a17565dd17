//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// The reference grid, one string per row.
pub const REFERENCE_ROWS: [&str; 4] = ["1234567890", "qwertyuiop", "asdfghjkl;", "zxcvbnm,./"];

/// Path to the keymorph binary
pub fn keymorph_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymorph")
}

/// Creates an isolated workspace with an empty config directory.
///
/// The returned command has `KEYMORPH_CONFIG_DIR` pointed at the temp dir so
/// the developer's own config never affects results.
pub fn isolated_command(workspace: &TempDir) -> Command {
    let config_dir = workspace.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");

    let mut cmd = Command::new(keymorph_bin());
    cmd.env("KEYMORPH_CONFIG_DIR", &config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside the workspace and returns the path.
pub fn write_file(workspace: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = workspace.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Writes a config.toml into the isolated config directory.
pub fn write_config(workspace: &TempDir, content: &str) -> PathBuf {
    let config_dir = workspace.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let path = config_dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Runs the command, feeding `stdin` to the process.
pub fn run_with_stdin(mut cmd: Command, stdin: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn keymorph");

    // The process may exit before reading stdin (e.g., on a bad command file)
    let _ = child.stdin.take().expect("stdin was piped").write_all(stdin);

    child.wait_with_output().expect("Failed to wait for keymorph")
}

/// Convenience: path as &str for argument lists.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
