use crate::cli::support::{chatlens, stdout_json, write_chat};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// lexicon command
// ============================================================================

#[test]
fn test_lexicon_toml() {
    let dir = tempdir().unwrap();
    chatlens(&dir)
        .arg("lexicon")
        .assert()
        .success()
        .stdout(predicate::str::contains("[thresholds]"))
        .stdout(predicate::str::contains("double_text_minutes = 5"));
}

#[test]
fn test_lexicon_json_reflects_config() {
    let dir = tempdir().unwrap();
    let config = write_chat(
        &dir,
        "custom.toml",
        "[lexicon]\npositive = [\"stellar\"]\n",
    );
    let output = chatlens(&dir)
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("lexicon")
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["lexicon"]["positive"], serde_json::json!(["stellar"]));
    assert_eq!(json["thresholds"]["top_k"], 5);
}
