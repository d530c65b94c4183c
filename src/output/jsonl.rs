#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Each result is one JSON object on its own line, tagged by `type`:
//! `created` when the record was bootstrapped, `current` for the current
//! version, and `bump` after a successful bump.

use crate::document::DocumentSync;
use crate::manager::BumpOutcome;
use crate::types::SemVer;
use serde::Serialize;
use std::path::Path;

/// JSONL output formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Record emitted when the version record was bootstrapped
    pub fn created(&self, record_path: &Path, version: SemVer) -> serde_json::Result<String> {
        to_line(&CreatedRecord {
            record_type: "created",
            record: record_path.to_string_lossy().into_owned(),
            version,
        })
    }

    /// Record emitted for the current version
    pub fn current(&self, version: SemVer) -> serde_json::Result<String> {
        to_line(&CurrentRecord {
            record_type: "current",
            version,
        })
    }

    /// Record emitted after a successful bump
    pub fn bumped(&self, outcome: &BumpOutcome) -> serde_json::Result<String> {
        to_line(&BumpRecord {
            record_type: "bump",
            previous: outcome.previous,
            version: outcome.version,
            kind: outcome.kind.as_str(),
            changelog: &outcome.changelog,
            document: document_status(&outcome.document),
        })
    }
}

fn document_status(sync: &DocumentSync) -> &'static str {
    match sync {
        DocumentSync::Updated { .. } => "updated",
        DocumentSync::MarkerNotFound => "marker_not_found",
        DocumentSync::DocumentMissing => "document_missing",
    }
}

fn to_line<T: Serialize>(record: &T) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Bootstrap record for JSONL output
#[derive(Debug, Serialize)]
struct CreatedRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    record: String,
    version: SemVer,
}

/// Current version record for JSONL output
#[derive(Debug, Serialize)]
struct CurrentRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    version: SemVer,
}

/// Bump record for JSONL output
#[derive(Debug, Serialize)]
struct BumpRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    previous: SemVer,
    version: SemVer,
    kind: &'static str,
    changelog: &'a str,
    document: &'static str,
}
