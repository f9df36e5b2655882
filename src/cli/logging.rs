//! Tracing setup for the binary

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays free for workflow commands. `RUST_LOG`
/// overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}
