//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary (or to the embedding application).
//!
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=cfgtree=debug`.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber used by the CLI.
///
/// `verbose` raises the default level from `warn` to `debug`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
