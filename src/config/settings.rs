//! Parsing and validation for verbump.toml settings files
//!
//! Every key is optional; a missing settings file means defaults throughout.

use crate::document::VersionMarker;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "verbump.toml";
/// Default location of the version record
pub const DEFAULT_RECORD_PATH: &str = "version.json";
/// Default location of the companion document
pub const DEFAULT_DOCUMENT_PATH: &str = "index.html";
/// Default id of the span holding the displayed version
pub const DEFAULT_MARKER_ID: &str = "app-version";

/// Main settings struct for verbump.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Version marker in the companion document
    #[serde(default)]
    pub marker: MarkerConfig,
}

/// File locations section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Version record (JSON)
    #[serde(default = "default_record_path")]
    pub record: PathBuf,

    /// Companion document whose marker mirrors the version
    #[serde(default = "default_document_path")]
    pub document: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            record: default_record_path(),
            document: default_document_path(),
        }
    }
}

/// Version marker section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    /// `id` attribute of the span holding the version
    #[serde(default = "default_marker_id")]
    pub id: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            id: default_marker_id(),
        }
    }
}

fn default_record_path() -> PathBuf {
    PathBuf::from(DEFAULT_RECORD_PATH)
}

fn default_document_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT_PATH)
}

fn default_marker_id() -> String {
    DEFAULT_MARKER_ID.to_string()
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve settings for an invocation
    ///
    /// An explicit path must exist. Without one, verbump.toml in the working
    /// directory is used when present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading settings");
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_SETTINGS_FILE);
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "loading settings");
            Self::load(default_path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Apply command-line path overrides and re-validate
    pub fn with_overrides(
        mut self,
        record: Option<PathBuf>,
        document: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(record) = record {
            self.paths.record = record;
        }
        if let Some(document) = document {
            self.paths.document = document;
        }
        self.validate()?;
        Ok(self)
    }

    /// Locator for the configured version marker
    pub fn marker(&self) -> VersionMarker {
        VersionMarker::new(&self.marker.id)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.record.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.record must not be empty".to_string(),
            ));
        }

        if self.paths.document.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.document must not be empty".to_string(),
            ));
        }

        if self.paths.record == self.paths.document {
            return Err(ConfigError::Validation(format!(
                "paths.record and paths.document both point to '{}'",
                self.paths.record.display()
            )));
        }

        let id = &self.marker.id;
        if id.is_empty() {
            return Err(ConfigError::Validation(
                "marker.id must not be empty".to_string(),
            ));
        }
        if id.chars().any(|c| matches!(c, '"' | '<' | '>')) {
            return Err(ConfigError::Validation(format!(
                "marker.id '{}' must not contain quotes or angle brackets",
                id
            )));
        }

        Ok(())
    }
}
