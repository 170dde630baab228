//! Logging for flowmindctl
//!
//! `RUST_LOG` wins when set; otherwise `warn`, raised to `debug` by the
//! `-v` flag. Analytics events are emitted under the `analytics` target
//! so they can be filtered independently.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
