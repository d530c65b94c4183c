//! Bump command implementation
//!
//! This module implements `verbump [KIND] add TEXT`, which:
//! - Creates the version record if the project has none
//! - Advances the version and prepends a history entry
//! - Writes the new version into the companion document's marker
//! - Warns when the document is missing or has no marker

use crate::cli::common::{CommandError, finish};
use crate::manager::{Initialization, VersionManager};
use crate::output::Printer;
use crate::types::{BumpKind, SemVer};
use termcolor::WriteColor;

/// Run the bump command
///
/// # Arguments
///
/// * `kind` - Which version component to advance
/// * `changelog` - Description of the change (must not be empty)
///
/// # Returns
///
/// Exit code:
/// - 0: Success (including when only the record could be updated)
/// - 1: Missing changelog
/// - 2: Error (corrupt record, I/O failure)
pub fn run_bump<O: WriteColor, E: WriteColor>(
    manager: &VersionManager,
    kind: BumpKind,
    changelog: &str,
    printer: &mut Printer<O, E>,
) -> i32 {
    let result = run_bump_inner(manager, kind, changelog, printer);
    finish(printer, result)
}

fn run_bump_inner<O: WriteColor, E: WriteColor>(
    manager: &VersionManager,
    kind: BumpKind,
    changelog: &str,
    printer: &mut Printer<O, E>,
) -> Result<(), CommandError> {
    let outcome = manager.bump(kind, Some(changelog))?;
    let paths = &manager.settings().paths;

    if outcome.initialization == Initialization::Created {
        printer.created(&paths.record, SemVer::INITIAL)?;
    }
    printer.bumped(&outcome, &paths.document)?;

    Ok(())
}
