//! Version manager
//!
//! Ties the record and the companion document together:
//! - Bootstraps the record on first use
//! - Computes the next version for a bump and appends it to history
//! - Writes the record, then mirrors the version into the document
//!
//! The record write and the document write are independent. If the document
//! write fails, the record keeps the new version.

use crate::config::Settings;
use crate::document::{DocumentSync, sync_document};
use crate::error::{UsageError, VerbumpError};
use crate::record::VersionRecord;
use crate::types::{BumpKind, SemVer};
use chrono::{NaiveDate, Utc};

/// Whether a call had to create the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialization {
    /// The record did not exist and was written with the initial version
    Created,
    /// The record was already present
    Existing,
}

/// Result of [`VersionManager::show_current`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentVersion {
    pub version: SemVer,
    pub initialization: Initialization,
}

/// Result of a successful [`VersionManager::bump`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: SemVer,
    pub version: SemVer,
    pub kind: BumpKind,
    pub changelog: String,
    pub initialization: Initialization,
    pub document: DocumentSync,
}

/// Maintains the version record and companion document described by a
/// [`Settings`]
#[derive(Debug, Clone)]
pub struct VersionManager {
    settings: Settings,
    today: NaiveDate,
}

impl VersionManager {
    /// Creates a manager that stamps entries with the current UTC date
    pub fn new(settings: Settings) -> Self {
        Self::with_date(settings, Utc::now().date_naive())
    }

    /// Creates a manager that stamps entries with `today`
    pub fn with_date(settings: Settings, today: NaiveDate) -> Self {
        VersionManager { settings, today }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the initial record if none exists
    pub fn ensure_initialized(&self) -> Result<Initialization, VerbumpError> {
        let path = &self.settings.paths.record;
        if path.exists() {
            return Ok(Initialization::Existing);
        }

        VersionRecord::initial(self.today).save(path)?;
        tracing::info!(path = %path.display(), version = %SemVer::INITIAL, "created version record");
        Ok(Initialization::Created)
    }

    /// Loads the record, bootstrapping it first if needed
    pub fn load(&self) -> Result<(VersionRecord, Initialization), VerbumpError> {
        let initialization = self.ensure_initialized()?;
        let record = VersionRecord::load(&self.settings.paths.record)?;
        Ok((record, initialization))
    }

    /// Reports the current version
    pub fn show_current(&self) -> Result<CurrentVersion, VerbumpError> {
        let (record, initialization) = self.load()?;
        Ok(CurrentVersion {
            version: record.version(),
            initialization,
        })
    }

    /// Advances the version, records the change and updates the document
    ///
    /// A missing or empty changelog is rejected before any file is touched.
    pub fn bump(
        &self,
        kind: BumpKind,
        changelog: Option<&str>,
    ) -> Result<BumpOutcome, VerbumpError> {
        let changelog = match changelog {
            Some(text) if !text.is_empty() => text,
            _ => return Err(UsageError::MissingChangelog.into()),
        };

        let (mut record, initialization) = self.load()?;
        let previous = record.version();
        let version = record.apply_bump(kind, changelog, self.today)?;

        record.save(&self.settings.paths.record)?;
        tracing::info!(%previous, %version, %kind, "bumped version");

        let document = sync_document(
            &self.settings.paths.document,
            &self.settings.marker(),
            version,
        )?;

        Ok(BumpOutcome {
            previous,
            version,
            kind,
            changelog: changelog.to_string(),
            initialization,
            document,
        })
    }
}
