//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (-1 quiet, 0 info, 1 debug, 2+ trace).
pub fn init(verbosity: i8) {
    let default_level = match verbosity {
        i8::MIN..=-1 => "b3_tracker=error",
        0 => "b3_tracker=info",
        1 => "b3_tracker=debug",
        _ => "b3_tracker=trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
