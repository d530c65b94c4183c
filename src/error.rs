//! Error types for verbump
//!
//! Errors are grouped by concern (settings, the persisted record, command-line
//! usage) and wrapped by [`VerbumpError`] at the top level.

use crate::types::VersionOverflowError;
use std::path::PathBuf;

/// Settings (verbump.toml) errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML
    #[error("Invalid settings syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings parsed but failed validation
    #[error("Invalid settings: {0}")]
    Validation(String),
}

/// Errors reading or writing the version record
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record exists but does not match the expected shape
    #[error("Corrupt version record {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The record could not be serialized
    #[error("Failed to serialize version record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Command-line usage errors
///
/// These are reported together with usage instructions and exit with status 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// The `add` keyword was not found where it is required
    #[error("the \"add\" keyword is required")]
    MissingAddKeyword,

    /// A bump was requested without a changelog
    #[error("a changelog is required to update the version")]
    MissingChangelog,
}

/// Top-level error type for verbump
#[derive(Debug, thiserror::Error)]
pub enum VerbumpError {
    /// Settings error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Version record error
    #[error("{0}")]
    Record(#[from] RecordError),

    /// Usage error
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// The requested bump cannot be represented
    #[error("{0}")]
    VersionOverflow(#[from] VersionOverflowError),

    /// Companion document could not be read or written
    #[error("I/O error on document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VerbumpError {
    /// Returns true for errors caused by how the tool was invoked
    pub fn is_usage(&self) -> bool {
        matches!(self, VerbumpError::Usage(_))
    }
}
