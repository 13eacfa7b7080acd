// src/log.rs
//
// Subscriber setup for the binary. Library code only emits `tracing` events;
// it never installs a subscriber itself.

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn,fii_scrape=info";

/// Log to stderr with time since start; stdout stays reserved for the table.
/// Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
