//! Interpreting the positional words of a command line
//!
//! Accepted forms:
//! - `add TEXT...` bumps the patch version
//! - `KIND add TEXT...` bumps the given kind (`major`, `minor`, `patch`;
//!   anything else counts as `patch`)
//!
//! Either form without changelog text just shows the current version.

use crate::error::UsageError;
use crate::types::BumpKind;

/// Keyword that introduces the changelog text
pub const ADD_KEYWORD: &str = "add";

/// What a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Report the current version
    ShowCurrent,
    /// Bump the version with a changelog
    Bump { kind: BumpKind, changelog: String },
}

impl Invocation {
    /// Interprets the positional words
    ///
    /// Changelog words are joined with single spaces.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, UsageError> {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

        let (kind, text) = match words.as_slice() {
            [ADD_KEYWORD, text @ ..] => (BumpKind::Patch, text),
            [kind, ADD_KEYWORD, text @ ..] => (BumpKind::from_word(kind), text),
            _ => return Err(UsageError::MissingAddKeyword),
        };

        let changelog = text.join(" ");
        if changelog.is_empty() {
            return Ok(Invocation::ShowCurrent);
        }

        Ok(Invocation::Bump { kind, changelog })
    }
}
