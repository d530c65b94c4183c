#![forbid(unsafe_code)]

//! verbump: semantic version and changelog bookkeeping
//!
//! verbump keeps a project's version number and change history in a JSON
//! record and mirrors the current version into a generated page.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod manager;
pub mod output;
pub mod record;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, RecordError, UsageError, VerbumpError};

// Re-export core domain types for convenient access
pub use manager::{BumpOutcome, VersionManager};
pub use record::{HistoryEntry, VersionRecord};
pub use types::{BumpKind, EntryKind, SemVer};
