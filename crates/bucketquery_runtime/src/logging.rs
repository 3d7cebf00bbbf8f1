//! Log subscriber setup.
//!
//! Logs always go to stderr so stdout carries only rendered expressions.

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from
/// [`RuntimeConfig::log_level`]. Calling this twice is harmless: the second
/// call leaves the first subscriber in place.
pub fn init_logging(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
