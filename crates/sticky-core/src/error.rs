//! Error types and exit codes for sticky
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing note, note ids used up)

use std::path::PathBuf;
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
    /// Data error - missing note or no free id (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during sticky operations
#[derive(Error, Debug)]
pub enum StickyError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("note not found: #{id}")]
    NoteNotFound { id: i64 },

    #[error("no note id left after #{last}")]
    IdsExhausted { last: i64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {path:?}: {reason}")]
    FailedOperation {
        operation: String,
        path: PathBuf,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl StickyError {
    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl Into<PathBuf>,
        error: impl std::fmt::Display,
    ) -> Self {
        StickyError::FailedOperation {
            operation: operation.to_string(),
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        StickyError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StickyError::UsageError(_) | StickyError::InvalidValue { .. } => ExitCode::Usage,

            StickyError::NoteNotFound { .. } | StickyError::IdsExhausted { .. } => ExitCode::Data,

            StickyError::Io(_)
            | StickyError::Json(_)
            | StickyError::Toml(_)
            | StickyError::FailedOperation { .. }
            | StickyError::Other(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            StickyError::UsageError(_) => "usage_error",
            StickyError::InvalidValue { .. } => "invalid_value",
            StickyError::NoteNotFound { .. } => "note_not_found",
            StickyError::IdsExhausted { .. } => "ids_exhausted",
            StickyError::Io(_) => "io_error",
            StickyError::Json(_) => "json_error",
            StickyError::Toml(_) => "toml_error",
            StickyError::FailedOperation { .. } => "failed_operation",
            StickyError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for sticky operations
pub type Result<T> = std::result::Result<T, StickyError>;
