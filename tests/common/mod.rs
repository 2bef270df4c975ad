//! Shared helpers for integration tests.

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness. `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
