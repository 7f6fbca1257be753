//! Process-wide telemetry setup.
//!
//! One entry point for binaries and benches, one for tests. Output is JSON
//! lines filtered through `RUST_LOG`, with an `info` floor when the variable
//! is unset.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Safe to call multiple times; only the first call installs a subscriber,
/// later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .try_init();
}

/// Like [`init`], but routes output through the test harness so captured
/// logs only surface for failing tests.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
