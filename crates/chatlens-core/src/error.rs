//! Error types and exit codes for chatlens
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (no recognizable messages, wrong participant count)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unsupported transcript contents (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, parsing or analyzing a transcript
#[derive(Error, Debug)]
pub enum ChatlensError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no messages found: input does not look like a supported chat export")]
    NoMessagesFound,

    #[error("expected exactly 2 participants, found {found}: {}", contacts.join(", "))]
    ParticipantCount { found: usize, contacts: Vec<String> },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ChatlensError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ChatlensError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ChatlensError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ChatlensError::UnknownFormat(_)
            | ChatlensError::UsageError(_)
            | ChatlensError::InvalidValue { .. } => ExitCode::Usage,

            ChatlensError::NoMessagesFound | ChatlensError::ParticipantCount { .. } => {
                ExitCode::Data
            }

            ChatlensError::Io(_)
            | ChatlensError::Json(_)
            | ChatlensError::Toml(_)
            | ChatlensError::FailedOperationWithTarget { .. }
            | ChatlensError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ChatlensError::UnknownFormat(_) => "unknown_format",
            ChatlensError::UsageError(_) => "usage_error",
            ChatlensError::InvalidValue { .. } => "invalid_value",
            ChatlensError::NoMessagesFound => "no_messages_found",
            ChatlensError::ParticipantCount { .. } => "participant_count",
            ChatlensError::Io(_) => "io_error",
            ChatlensError::Json(_) => "json_error",
            ChatlensError::Toml(_) => "toml_error",
            ChatlensError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ChatlensError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let ChatlensError::ParticipantCount { contacts, .. } = self {
            error_obj["contacts"] = serde_json::json!(contacts);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for chatlens operations
pub type Result<T> = std::result::Result<T, ChatlensError>;
