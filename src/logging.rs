//! Logging setup
//!
//! Diagnostics go to stderr through a tracing subscriber so stdout only
//! carries the operator-facing messages. `RUST_LOG` takes precedence over the
//! `-v` count.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that may occur while initializing logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber is already installed
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "verbump=info",
        2 => "verbump=debug",
        _ => "verbump=trace",
    }
}

/// Install the global subscriber
pub fn init(verbosity: u8) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "verbump=info");
        assert_eq!(default_directive(2), "verbump=debug");
        assert_eq!(default_directive(9), "verbump=trace");
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(default_directive(verbosity)).is_ok());
        }
    }
}
