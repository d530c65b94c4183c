//! Common helper functions shared across CLI commands

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::{ConfigError, VerbumpError};
use crate::output::Printer;
use std::io;
use termcolor::WriteColor;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Resolve settings for this invocation
///
/// Precedence: command-line paths, then the settings file, then defaults.
///
/// # Errors
///
/// Returns `ConfigError` if an explicit settings file is missing, or if the
/// settings are malformed or invalid.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    Settings::discover(cli.config.as_deref())?
        .with_overrides(cli.record.clone(), cli.document.clone())
}

/// Error type shared by the command runners
#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Verbump(#[from] VerbumpError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Map a runner's result to an exit code, reporting any error
pub(crate) fn finish<O: WriteColor, E: WriteColor>(
    printer: &mut Printer<O, E>,
    result: Result<(), CommandError>,
) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(CommandError::Verbump(e)) => report_error(printer, &e),
        Err(CommandError::Output(e)) => {
            tracing::error!(error = %e, "failed to write output");
            EXIT_ERROR
        }
    }
}

/// Report an error and pick the matching exit code
pub(crate) fn report_error<O: WriteColor, E: WriteColor>(
    printer: &mut Printer<O, E>,
    error: &VerbumpError,
) -> i32 {
    tracing::debug!(?error, "command failed");

    let written = match error {
        VerbumpError::Usage(usage) => printer.usage(usage),
        other => printer.error(&other.to_string()),
    };
    if let Err(e) = written {
        tracing::debug!(error = %e, "could not write error report");
    }

    if error.is_usage() { EXIT_USAGE } else { EXIT_ERROR }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::error::UsageError;
    use clap::Parser;
    use std::path::PathBuf;
    use termcolor::Buffer;

    #[test]
    fn test_resolve_settings_explicit_missing_file() {
        let cli = Cli::parse_from(["verbump", "--config", "/nonexistent/verbump.toml"]);
        let result = resolve_settings(&cli);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_resolve_settings_explicit_file_with_overrides() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("verbump.toml");
        std::fs::write(
            &config_path,
            "[paths]\nrecord = \"from-file.json\"\ndocument = \"from-file.html\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "verbump".to_string(),
            "--config".to_string(),
            config_path.display().to_string(),
            "--document".to_string(),
            "from-flag.html".to_string(),
        ]);
        let settings = resolve_settings(&cli).unwrap();

        assert_eq!(settings.paths.record, PathBuf::from("from-file.json"));
        assert_eq!(settings.paths.document, PathBuf::from("from-flag.html"));
    }

    #[test]
    fn test_report_error_exit_codes() {
        let mut printer = Printer::new(OutputFormat::Human, Buffer::no_color(), Buffer::no_color());

        let usage = VerbumpError::from(UsageError::MissingChangelog);
        assert_eq!(report_error(&mut printer, &usage), EXIT_USAGE);

        let config = VerbumpError::from(ConfigError::Validation("bad".to_string()));
        assert_eq!(report_error(&mut printer, &config), EXIT_ERROR);

        let (_, err) = printer.into_inner();
        let err = String::from_utf8(err.into_inner()).unwrap();
        assert!(err.contains("Error: a changelog is required"));
        assert!(err.contains("Usage: verbump"));
        assert!(err.contains("Error: Configuration error: Invalid settings: bad"));
    }
}
