use std::env;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber.
///
/// `DECKTUNE_LOG` takes an `EnvFilter` directive (default `info`); `verbose`
/// overrides it with `debug`.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        env::var("DECKTUNE_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(EnvFilter::new(filter))
        .init();
}
