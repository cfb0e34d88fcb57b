use crate::cli::support::{chatlens, stdout_json, write_chat, SAMPLE_CHAT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// parse command
// ============================================================================

#[test]
fn test_parse_human_reports_skipped_lines() {
    let dir = tempdir().unwrap();
    let path = write_chat(
        &dir,
        "chat.txt",
        "1/2/24, 10:00 - Alice: hello\nMessages are end-to-end encrypted\n1/2/24, 10:05 - Bob: hi",
    );
    chatlens(&dir)
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-01 10:00:00  Alice: hello"))
        .stdout(predicate::str::contains("2 messages, 1 lines skipped"));
}

#[test]
fn test_parse_quiet_omits_summary() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    chatlens(&dir)
        .args(["--quiet", "parse"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("lines skipped").not());
}

#[test]
fn test_parse_json() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", "[01/02/2024, 9:05:30 PM] Bob: late one");
    let output = chatlens(&dir)
        .args(["--format", "json", "parse"])
        .arg(&path)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["skipped_lines"], 0);
    assert_eq!(json["messages"][0]["contact"], "Bob");
    assert_eq!(json["messages"][0]["text"], "late one");
    assert_eq!(json["messages"][0]["timestamp"], "2024-02-01T21:05:30");
}

#[test]
fn test_parse_records_escapes_quotes() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", "1/2/24, 10:00 - Alice: she said \"hi\"");
    chatlens(&dir)
        .args(["--format", "records", "parse"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "M 2024-02-01T10:00:00 \"Alice\" \"she said \\\"hi\\\"\"",
        ));
}

#[test]
fn test_parse_records_escapes_backslashes() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", "1/2/24, 10:00 - Alice: saved to C:\\temp\\");
    chatlens(&dir)
        .args(["--format", "records", "parse"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "M 2024-02-01T10:00:00 \"Alice\" \"saved to C:\\\\temp\\\\\"\n",
        ));
}
