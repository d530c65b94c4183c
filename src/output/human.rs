#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Produces the confirmation messages shown after each command. Styling is
//! applied by the printer, not here.

use crate::document::DocumentSync;
use crate::manager::BumpOutcome;
use crate::types::SemVer;
use std::path::Path;

/// Usage instructions printed alongside usage errors
pub const USAGE: &str = "Usage: verbump [major|minor|patch] add \"description of the changes\"\n   or: verbump add \"description of the changes\" (patch by default)";

/// Human-readable formatter for command results
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Message shown when the record was bootstrapped
    pub fn created(&self, record_path: &Path, version: SemVer) -> String {
        format!(
            "Created {} with version {}",
            record_path.display(),
            version
        )
    }

    /// Message shown for the current version
    pub fn current(&self, version: SemVer) -> String {
        format!("Current version: {}", version)
    }

    /// Lines shown after a successful bump
    pub fn bumped(&self, outcome: &BumpOutcome) -> Vec<String> {
        vec![
            format!("Version updated to {}", outcome.version),
            format!("Changelog: {}", outcome.changelog),
        ]
    }

    /// Warning shown when the companion document does not exist
    ///
    /// A document without a marker is only reported through logging.
    pub fn document_warning(&self, document_path: &Path, sync: &DocumentSync) -> Option<String> {
        match sync {
            DocumentSync::Updated { .. } | DocumentSync::MarkerNotFound => None,
            DocumentSync::DocumentMissing => Some(format!(
                "{} not found; only the version record was updated",
                document_path.display()
            )),
        }
    }
}
