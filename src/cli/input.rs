//! Transcript acquisition for CLI commands

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chatlens_core::error::{ChatlensError, Result};

/// Read the whole transcript from a file, or from stdin when the path is `-`
pub fn read_transcript(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ChatlensError::io_operation("read", "stdin", e))?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| ChatlensError::io_operation("read", path.display(), e))
}
