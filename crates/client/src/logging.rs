//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, otherwise from `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install a formatting subscriber at `level`.
///
/// Returns false when a global subscriber was already installed.
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .try_init()
        .is_ok()
}
