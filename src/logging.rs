//! Log output setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, logging to stderr.
///
/// `verbose` lowers the level from `info` to `debug`, which also turns on
/// per-request HTTP traces.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(format!(
        "{}={level},tower_http={level}",
        env!("CARGO_CRATE_NAME")
    ));

    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
