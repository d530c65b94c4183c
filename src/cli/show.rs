//! Show command implementation
//!
//! Prints the current version, creating the record first if the project has
//! none yet.

use crate::cli::common::{CommandError, finish};
use crate::manager::{Initialization, VersionManager};
use crate::output::Printer;
use termcolor::WriteColor;

/// Run the show command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (unreadable or corrupt record, I/O failure)
pub fn run_show<O: WriteColor, E: WriteColor>(
    manager: &VersionManager,
    printer: &mut Printer<O, E>,
) -> i32 {
    let result = run_show_inner(manager, printer);
    finish(printer, result)
}

fn run_show_inner<O: WriteColor, E: WriteColor>(
    manager: &VersionManager,
    printer: &mut Printer<O, E>,
) -> Result<(), CommandError> {
    let current = manager.show_current()?;

    if current.initialization == Initialization::Created {
        printer.created(&manager.settings().paths.record, current.version)?;
    }
    printer.current(current.version)?;

    Ok(())
}
