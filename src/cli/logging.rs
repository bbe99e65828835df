use std::io;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `-v` turns on debug events for this crate; otherwise `RUST_LOG` decides,
/// defaulting to warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
