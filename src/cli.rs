//! CLI argument parsing and command dispatch

pub mod args;
pub mod bump;
pub mod common;
pub mod dispatch;
pub mod invocation;
pub mod show;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, OutputFormat};
pub use invocation::Invocation;
