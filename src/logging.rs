//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! final report.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Defaults to INFO, overridable via `RUST_LOG`. Calling it again is a no-op.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
