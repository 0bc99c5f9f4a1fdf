//! Tracing bootstrap for binaries embedding the town service.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG`, falling back to `info` for the
/// shoreline crates. Calling this twice is harmless: the second install
/// loses the race and the first subscriber stays.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shoreline=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
