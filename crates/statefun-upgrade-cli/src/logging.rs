//! Logging setup for the CLI
//!
//! Diagnostics go to stderr so the converted document on stdout stays
//! clean. The filter comes from `RUST_LOG`, defaulting to warnings only.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| Error::other(format!("failed to initialize logging: {}", e)))
}
