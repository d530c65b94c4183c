//! CLI argument parsing using clap
//!
//! Options are declared with clap; the positional words (`[KIND] add TEXT...`)
//! are collected as-is and interpreted by [`crate::cli::invocation`].

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// verbump CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Keep a project's semantic version and changelog history up to date")]
#[command(version)]
#[command(override_usage = "verbump [OPTIONS] [major|minor|patch] add <CHANGELOG>...")]
#[command(
    after_help = "Examples:\n  verbump add \"fix login redirect\"\n  verbump minor add \"export to CSV\"\n  verbump major add \"drop the v1 API\""
)]
pub struct Cli {
    /// Settings file (defaults to verbump.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Version record to maintain
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Companion document whose version marker is kept in sync
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Bump kind, the `add` keyword, then the changelog text
    #[arg(value_name = "WORDS", num_args = 1.., trailing_var_arg = true)]
    pub words: Vec<String>,
}
