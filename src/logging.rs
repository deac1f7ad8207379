//! Tracing setup for the `spherepi` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! host's job. Output goes to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SPHEREPI_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparseable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber, honoring [`LOG_ENV`].
///
/// `verbose` raises the default to `debug` when the variable is unset.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
