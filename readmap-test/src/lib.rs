//! Test utilities for the readmap workspace
//!
//! Shared fixtures (reads, databases and known-good reports), an isolated
//! test environment, and a stand-in `blat` script for process tests.

pub mod environment;
pub mod fixtures;
pub mod stub;

pub use environment::TestEnvironment;
pub use stub::StubBlat;

pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
///
/// Honours `READMAP_LOG`; output goes through the test harness capture.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("READMAP_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
