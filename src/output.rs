//! Output formatting and printing
//!
//! Results go to stdout in the selected format. Warnings, errors and usage
//! text always go to stderr as plain prefixed lines.

pub mod human;
pub mod jsonl;

pub use human::{HumanFormatter, USAGE};
pub use jsonl::JsonlFormatter;

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::error::UsageError;
use crate::manager::BumpOutcome;
use crate::types::SemVer;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Writes command results and diagnostics
pub struct Printer<O, E> {
    format: OutputFormat,
    out: O,
    err: E,
}

impl Printer<StandardStream, StandardStream> {
    /// Printer on the process's stdout and stderr
    pub fn stdio(format: OutputFormat, color: ColorChoice) -> Self {
        let out_choice = resolve_color(color, io::stdout().is_terminal());
        let err_choice = resolve_color(color, io::stderr().is_terminal());
        Printer::new(
            format,
            StandardStream::stdout(out_choice),
            StandardStream::stderr(err_choice),
        )
    }
}

fn resolve_color(choice: ColorChoice, is_terminal: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

impl<O: WriteColor, E: WriteColor> Printer<O, E> {
    pub fn new(format: OutputFormat, out: O, err: E) -> Self {
        Printer { format, out, err }
    }

    /// Reports that the record was bootstrapped
    pub fn created(&mut self, record_path: &Path, version: SemVer) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => {
                let line = HumanFormatter::new().created(record_path, version);
                writeln!(self.out, "{}", line)
            }
            OutputFormat::Jsonl => {
                let line = JsonlFormatter::new().created(record_path, version)?;
                writeln!(self.out, "{}", line)
            }
        }
    }

    /// Reports the current version
    pub fn current(&mut self, version: SemVer) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => {
                let line = HumanFormatter::new().current(version);
                writeln!(self.out, "{}", line)
            }
            OutputFormat::Jsonl => {
                let line = JsonlFormatter::new().current(version)?;
                writeln!(self.out, "{}", line)
            }
        }
    }

    /// Reports a successful bump, warning if the document is missing
    pub fn bumped(&mut self, outcome: &BumpOutcome, document_path: &Path) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => {
                let formatter = HumanFormatter::new();
                let mut lines = formatter.bumped(outcome).into_iter();
                if let Some(headline) = lines.next() {
                    self.out
                        .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                    write!(self.out, "{}", headline)?;
                    self.out.reset()?;
                    writeln!(self.out)?;
                }
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
            }
            OutputFormat::Jsonl => {
                let line = JsonlFormatter::new().bumped(outcome)?;
                writeln!(self.out, "{}", line)?;
            }
        }

        if let Some(warning) = HumanFormatter::new().document_warning(document_path, &outcome.document)
        {
            self.warning(&warning)?;
        }
        Ok(())
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.prefixed(Color::Yellow, "Warning:", message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.prefixed(Color::Red, "Error:", message)
    }

    /// Reports a usage error followed by usage instructions
    pub fn usage(&mut self, error: &UsageError) -> io::Result<()> {
        self.error(&error.to_string())?;
        writeln!(self.err, "{}", USAGE)
    }

    /// Consumes the printer, returning the underlying writers
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn prefixed(&mut self, color: Color, prefix: &str, message: &str) -> io::Result<()> {
        self.err
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.err, "{}", prefix)?;
        self.err.reset()?;
        writeln!(self.err, " {}", message)
    }
}
