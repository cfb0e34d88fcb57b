use crate::cli::support::{chatlens, stdout_json, write_chat, SAMPLE_CHAT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// analyze command
// ============================================================================

#[test]
fn test_analyze_human() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    chatlens(&dir)
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation: Alice & Bob"))
        .stdout(predicate::str::contains("Messages: 5 on 2 days"))
        .stdout(predicate::str::contains("messages: 3 (interest 60%)"))
        .stdout(predicate::str::contains("Compatibility: 80/100"));
}


#[test]
fn test_analyze_json() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    let output = chatlens(&dir)
        .args(["--format", "json", "analyze"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["total_messages"], 5);
    assert_eq!(json["conversation_days"], 2);
    assert_eq!(json["peak_hour"], 10);
    assert_eq!(json["peak_day"], "Thursday");

    let alice = &json["contacts"][0];
    assert_eq!(alice["contact"], "Alice");
    assert_eq!(alice["message_count"], 3);
    assert_eq!(alice["interest_level"], 60);
    assert_eq!(alice["conversation_starters"], 2);
    assert_eq!(alice["late_night_messages"], 1);
    assert_eq!(alice["top_emojis"][0]["item"], "😀");

    let bob = &json["contacts"][1];
    // replies after 5 minutes and after the overnight 525 minutes
    assert_eq!(bob["average_response_minutes"], 265);
    assert_eq!(bob["conversation_starters"], 1);
    assert_eq!(bob["early_morning_messages"], 1);
}


#[test]
fn test_analyze_records() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    chatlens(&dir)
        .args(["--format", "records", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H chatlens=1 records=1 mode=analyze messages=5 contacts=2 skipped=0",
        ))
        .stdout(predicate::str::contains("\nP compatibility=80 "))
        .stdout(predicate::str::contains("\nC \"Alice\" messages=3 interest=60 "))
        .stdout(predicate::str::contains("\nE \"Alice\" \"😀\" 1"));
}


#[test]
fn test_analyze_from_stdin() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .args(["analyze", "-"])
        .write_stdin("1/2/24, 10:00 - Alice: hello\n1/2/24, 10:05 - Bob: hi there!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compatibility: 100/100"));
}


#[test]
fn test_analyze_reports_red_flags() {
    let dir = tempdir().unwrap();
    let path = write_chat(
        &dir,
        "chat.txt",
        "1/2/24, 10:00 - Alice: did you talk to your ex?\n\
         1/2/24, 10:05 - Bob: no, she still owes me money",
    );
    let output = chatlens(&dir)
        .args(["--format", "json", "analyze"])
        .arg(&path)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let flags = json["red_flags"].as_array().unwrap();
    assert!(flags
        .iter()
        .any(|f| f["category"] == "money" && f["keyword"] == "money" && f["severity"] == "low"));
}


#[test]
fn test_analyze_extra_participants_listed() {
    let dir = tempdir().unwrap();
    let path = write_chat(
        &dir,
        "group.txt",
        "1/2/24, 10:00 - Alice: hi\n1/2/24, 10:01 - Bob: hey\n1/2/24, 10:02 - Carol: yo",
    );
    chatlens(&dir)
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not analyzed (more than two participants): Carol"));
}


#[test]
fn test_analyze_strict_rejects_group_chat() {
    let dir = tempdir().unwrap();
    let path = write_chat(
        &dir,
        "group.txt",
        "1/2/24, 10:00 - Alice: hi\n1/2/24, 10:01 - Bob: hey\n1/2/24, 10:02 - Carol: yo",
    );
    let output = chatlens(&dir)
        .args(["--format", "json", "analyze", "--strict"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "participant_count");
    assert_eq!(err["error"]["contacts"][2], "Carol");
}

