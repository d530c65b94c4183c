//! version.json parsing and management
//!
//! The version record holds the current version, the date and changelog of
//! the last change, and the full history of versions, most recent first.
//! History is append-only: entries are prepended by [`VersionRecord::apply_bump`]
//! and never modified afterwards.

use crate::error::RecordError;
use crate::types::{BumpKind, EntryKind, SemVer, VersionOverflowError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Changelog text written for the bootstrap entry
pub const INITIAL_CHANGELOG: &str = "Version initiale";

/// The persisted version record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    version: SemVer,
    build_date: NaiveDate,
    changelog: String,
    #[serde(default)]
    history: Vec<HistoryEntry>,

    /// Fields written by other tools, kept as-is on save
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// One past version transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub version: SemVer,
    pub date: NaiveDate,
    pub changelog: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl VersionRecord {
    /// Creates the record written on first use
    pub fn initial(today: NaiveDate) -> Self {
        VersionRecord {
            version: SemVer::INITIAL,
            build_date: today,
            changelog: INITIAL_CHANGELOG.to_string(),
            history: vec![HistoryEntry {
                version: SemVer::INITIAL,
                date: today,
                changelog: INITIAL_CHANGELOG.to_string(),
                kind: EntryKind::Initial,
            }],
            extra: serde_json::Map::new(),
        }
    }

    /// Parses a record from JSON
    ///
    /// `path` is only used to label errors.
    pub fn parse(s: &str, path: &Path) -> Result<Self, RecordError> {
        let corrupt = |message: String| RecordError::Corrupt {
            path: path.to_path_buf(),
            message,
        };

        let mut record: VersionRecord =
            serde_json::from_str(s).map_err(|e| corrupt(e.to_string()))?;
        record.fill_missing_history();
        record.validate().map_err(corrupt)?;
        Ok(record)
    }

    /// Loads a record from a file
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Serializes the record as pretty-printed JSON with a trailing newline
    pub fn to_json_string(&self) -> Result<String, RecordError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the record to a file, creating parent directories if needed
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let json = self.to_json_string()?;
        let io_err = |source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, json).map_err(io_err)
    }

    /// Advances the version and prepends a history entry
    ///
    /// Existing history entries are left untouched. Returns the new version,
    /// or an error without modifying the record if the version would overflow.
    pub fn apply_bump(
        &mut self,
        kind: BumpKind,
        changelog: &str,
        today: NaiveDate,
    ) -> Result<SemVer, VersionOverflowError> {
        let next = self.version.bump(kind)?;

        self.version = next;
        self.build_date = today;
        self.changelog = changelog.to_string();
        self.history.insert(
            0,
            HistoryEntry {
                version: next,
                date: today,
                changelog: changelog.to_string(),
                kind: kind.into(),
            },
        );

        Ok(next)
    }

    pub fn version(&self) -> SemVer {
        self.version
    }

    pub fn build_date(&self) -> NaiveDate {
        self.build_date
    }

    pub fn changelog(&self) -> &str {
        &self.changelog
    }

    /// History entries, most recent first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Gives a record saved without history a single entry for its version
    fn fill_missing_history(&mut self) {
        if self.history.is_empty() {
            tracing::debug!(version = %self.version, "record has no history; starting it from the current version");
            self.history.push(HistoryEntry {
                version: self.version,
                date: self.build_date,
                changelog: self.changelog.clone(),
                kind: EntryKind::Initial,
            });
        }
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(latest) = self.history.first()
            && latest.version != self.version
        {
            return Err(format!(
                "version {} does not match latest history entry {}",
                self.version, latest.version
            ));
        }

        Ok(())
    }
}
