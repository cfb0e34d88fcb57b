//! Utilities for records output format

/// Escape a string for a quoted records field.
/// Backslashes are doubled first, then `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Flatten a message body onto a single records line.
pub fn single_line(s: &str) -> String {
    escape_quotes(s).replace('\n', "\\n")
}
