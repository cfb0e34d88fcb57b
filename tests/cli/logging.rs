use crate::cli::support::{chatlens, write_chat, SAMPLE_CHAT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let path = write_chat(&dir, "chat.txt", SAMPLE_CHAT);
    chatlens(&dir)
        .args(["--verbose", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("analysis complete"));
}
