//! Error types for version-stamp.
//!
//! All operations return `Result<T>` which aliases `Result<T, VersionError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version update operations.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Target file does not exist.
    #[error("The file {0} does not exist")]
    FileNotFound(PathBuf),

    /// Reading or writing the target file failed.
    #[error("Could not {action} the file {path}: {source}")]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target section or its version entry was not found.
    #[error(
        "No version entry was updated. Please ensure the [{section}] section exists and contains a version entry"
    )]
    MissingField { section: String },

    /// Requested version equals the current one.
    #[error("No change in version. The current version is already {0}")]
    Unchanged(String),

    /// Requested version cannot be written into the file as-is.
    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, String),

    /// Section name cannot be turned into a header line.
    #[error("Invalid section '{0}': {1}")]
    InvalidSection(String, String),

    /// JSON parse or serialization error.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON with the wrong shape.
    #[error("Invalid config document: {0}")]
    InvalidDocument(String),

    /// Edited manifest no longer holds the requested version.
    #[error("Manifest verification failed: {0}")]
    VerificationFailed(String),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Which side of the read/modify/write cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoAction::Read => f.write_str("read"),
            IoAction::Write => f.write_str("write to"),
        }
    }
}

/// Result type alias for version-stamp operations.
pub type Result<T> = std::result::Result<T, VersionError>;
