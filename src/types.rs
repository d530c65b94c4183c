#![forbid(unsafe_code)]

//! Core domain types for verbump
//!
//! This module defines the semantic version triple and the kinds of change
//! that produce a new version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `MAJOR.MINOR.PATCH` version triple
///
/// Serialized as its dotted string form. Pre-release and build metadata are
/// not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    /// Version written when a record is first created
    pub const INITIAL: SemVer = SemVer::new(1, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next version for the given kind of change
    ///
    /// Lower components are reset to zero. Fails if the advanced component is
    /// already at `u64::MAX`.
    pub fn bump(self, kind: BumpKind) -> Result<Self, VersionOverflowError> {
        let overflow = || VersionOverflowError { version: self, kind };
        let next = match kind {
            BumpKind::Major => SemVer::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpKind::Minor => {
                SemVer::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            BumpKind::Patch => SemVer::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }
}

/// Error returned when a bump would overflow a version component
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply a {kind} bump to {version}: version component overflow")]
pub struct VersionOverflowError {
    pub version: SemVer,
    pub kind: BumpKind,
}

/// Error returned when a string is not a `MAJOR.MINOR.PATCH` triple
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
pub struct ParseSemVerError(String);

impl FromStr for SemVer {
    type Err = ParseSemVerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSemVerError(s.to_string());

        let mut parts = s.split('.');
        let mut next = || -> Result<u64, ParseSemVerError> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let version = SemVer::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<String> for SemVer {
    type Error = ParseSemVerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemVer> for String {
    fn from(version: SemVer) -> Self {
        version.to_string()
    }
}

/// Which component of the version a change advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Interprets a command-line word as a bump kind
    ///
    /// Matching is case-insensitive. Anything unrecognized is a patch.
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "major" => BumpKind::Major,
            "minor" => BumpKind::Minor,
            _ => BumpKind::Patch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` recorded on a history entry
///
/// Always written in lowercase. Reading is lenient: records written by
/// earlier tools may carry the raw command-line word (`"MAJOR"`, `"hotfix"`),
/// which is read the same way [`BumpKind::from_word`] reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Major,
    Minor,
    Patch,
    Initial,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Major => "major",
            EntryKind::Minor => "minor",
            EntryKind::Patch => "patch",
            EntryKind::Initial => "initial",
        }
    }

    /// Interprets a stored `type` value
    pub fn from_word(word: &str) -> Self {
        if word.eq_ignore_ascii_case("initial") {
            EntryKind::Initial
        } else {
            BumpKind::from_word(word).into()
        }
    }
}

impl From<String> for EntryKind {
    fn from(value: String) -> Self {
        EntryKind::from_word(&value)
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.as_str().to_string()
    }
}

impl From<BumpKind> for EntryKind {
    fn from(kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => EntryKind::Major,
            BumpKind::Minor => EntryKind::Minor,
            BumpKind::Patch => EntryKind::Patch,
        }
    }
}
