use crate::cli::support::{chatlens, write_chat};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: chatlens"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("lexicon"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatlens"));
}

#[test]
fn test_no_command_prints_blurb() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("chatlens --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .args(["--format", "yaml", "lexicon"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_input_exit_code_1() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .args(["analyze", "absent.txt"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_no_messages_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "notes.txt", "just some notes\nnothing to see here\n");
    chatlens(&dir)
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no messages"));
}

#[test]
fn test_no_messages_json_envelope() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "empty.txt", "");
    let output = chatlens(&dir)
        .args(["--format", "json", "analyze"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "no_messages_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_usage_error_json_envelope() {
    let dir = tempdir().unwrap();
    let output = chatlens(&dir)
        .args(["--format", "json", "analyze"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}
