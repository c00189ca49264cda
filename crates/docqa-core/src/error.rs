//! Error types and exit codes for docqa
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data/corpus error (unreadable directory, empty corpus)

mod macros;

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
    /// Data/corpus error - unreadable or empty corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum DocqaError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/corpus errors (exit code 3)
    #[error("cannot read {path:?}: {reason}")]
    FileAccess { path: PathBuf, reason: String },

    #[error("cannot compute IDF over an empty corpus")]
    EmptyCorpus,

    #[error("no text files found in {path:?}")]
    NoDocuments { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl DocqaError {
    /// Create an error for a path that could not be read
    pub fn file_access(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        DocqaError::FileAccess {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DocqaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocqaError::UsageError(_) | DocqaError::InvalidValue { .. } => ExitCode::Usage,

            DocqaError::FileAccess { .. }
            | DocqaError::EmptyCorpus
            | DocqaError::NoDocuments { .. } => ExitCode::Data,

            DocqaError::Io(_)
            | DocqaError::Json(_)
            | DocqaError::Toml(_)
            | DocqaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DocqaError::UsageError(_) => "usage_error",
            DocqaError::InvalidValue { .. } => "invalid_value",
            DocqaError::FileAccess { .. } => "file_access",
            DocqaError::EmptyCorpus => "empty_corpus",
            DocqaError::NoDocuments { .. } => "no_documents",
            DocqaError::Io(_) => "io_error",
            DocqaError::Json(_) => "json_error",
            DocqaError::Toml(_) => "toml_error",
            DocqaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for docqa operations
pub type Result<T> = std::result::Result<T, DocqaError>;
