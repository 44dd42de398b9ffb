//! Log subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `RUST_LOG` selects the filter (default `info`), e.g.
/// `RUST_LOG=hos_engine=debug` to trace every emitted entry.  Output goes to
/// stderr so the trip summary on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
