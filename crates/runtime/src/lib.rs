//! Process bootstrap shared by the demo binaries.

use tracing_subscriber::EnvFilter;

pub mod metrics;

pub use metrics::{MetricsRegistry, MetricsSnapshot, Stopwatch};

/// `RUST_LOG` when set and valid, otherwise `default`.
pub fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a stderr `fmt` subscriber; `RUST_LOG` overrides the INFO default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or("info"))
        .with_writer(std::io::stderr)
        .try_init();
}

