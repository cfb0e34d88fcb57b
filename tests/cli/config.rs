use crate::cli::support::{chatlens, stdout_json, write_chat, SAMPLE_CHAT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration loading
// ============================================================================

#[test]
fn test_analyze_with_config_thresholds() {
    let dir = tempdir().unwrap();
    let path = write_chat(
        &dir,
        "chat.txt",
        "1/2/24, 10:00 - Alice: hey\n1/2/24, 10:10 - Alice: you there\n1/2/24, 10:30 - Bob: yes",
    );
    let config = write_chat(&dir, "custom.toml", "[thresholds]\ndouble_text_minutes = 15\n");

    let output = chatlens(&dir)
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("analyze")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["contacts"][0]["double_texts"], 1);
}


#[test]
fn test_default_config_dir_is_read() {
    let dir = tempdir().unwrap();
    write_chat(&dir, "config.toml", "[thresholds]\ntop_k = 1\n");
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);

    let output = chatlens(&dir)
        .args(["--format", "json", "analyze"])
        .arg(&path)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["contacts"][0]["top_words"].as_array().unwrap().len(), 1);
}


#[test]
fn test_invalid_config_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    let config = write_chat(&dir, "bad.toml", "[thresholds]\ntop_k = 0\n");

    chatlens(&dir)
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("top_k"));
}

#[test]
fn test_oversized_window_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    let config = write_chat(
        &dir,
        "huge.toml",
        "[thresholds]\nresponse_window_minutes = 9223372036854775807\n",
    );

    chatlens(&dir)
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("response_window_minutes"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    let config = write_chat(&dir, "broken.toml", "[thresholds\n");

    chatlens(&dir)
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
