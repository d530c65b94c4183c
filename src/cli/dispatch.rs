//! Command dispatch
//!
//! Interprets the positional words before touching settings or files, so a
//! malformed command line never reads or writes anything.

use crate::cli::args::Cli;
use crate::cli::bump::run_bump;
use crate::cli::common::{report_error, resolve_settings};
use crate::cli::invocation::Invocation;
use crate::cli::show::run_show;
use crate::error::VerbumpError;
use crate::manager::VersionManager;
use crate::output::Printer;
use termcolor::WriteColor;

/// Run a parsed command line, returning the process exit code
pub fn run<O: WriteColor, E: WriteColor>(cli: &Cli, printer: &mut Printer<O, E>) -> i32 {
    let invocation = match Invocation::from_words(&cli.words) {
        Ok(invocation) => invocation,
        Err(usage) => return report_error(printer, &VerbumpError::from(usage)),
    };

    let settings = match resolve_settings(cli) {
        Ok(settings) => settings,
        Err(e) => return report_error(printer, &VerbumpError::from(e)),
    };
    tracing::debug!(
        record = %settings.paths.record.display(),
        document = %settings.paths.document.display(),
        "resolved settings"
    );

    run_invocation(&invocation, &VersionManager::new(settings), printer)
}

/// Run an already interpreted invocation against a manager
pub fn run_invocation<O: WriteColor, E: WriteColor>(
    invocation: &Invocation,
    manager: &VersionManager,
    printer: &mut Printer<O, E>,
) -> i32 {
    match invocation {
        Invocation::ShowCurrent => run_show(manager, printer),
        Invocation::Bump { kind, changelog } => run_bump(manager, *kind, changelog, printer),
    }
}
