use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A two-person export: Alice sends 3 messages, Bob 2, over two days
#[allow(dead_code)]
pub const SAMPLE_CHAT: &str = "\
1/2/24, 10:00 - Alice: hello there
1/2/24, 10:05 - Bob: hi! how are you?
1/2/24, 10:06 - Alice: great, love the weather 😀
1/2/24, 23:30 - Alice: good night
2/2/24, 08:15 - Bob: morning";

/// Get a Command for chatlens that ignores any user config
pub fn chatlens(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("chatlens");
    cmd.env("CHATLENS_CONFIG_DIR", dir.path())
        .env_remove("CHATLENS_CONFIG")
        .env_remove("CHATLENS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a transcript into the test directory and return its path
#[allow(dead_code)]
pub fn write_chat(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
