//! Structured logging setup for the command-line binary

use crate::io::configuration::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Install a stderr `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the `verbose` flag. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("identicon version {}", env!("CARGO_PKG_VERSION"));
    }
}
