//! Diagnostic output on stderr.
//!
//! `RUST_LOG` takes precedence over the configured level. Calling [`init`]
//! more than once keeps the first subscriber.

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<String> = OnceCell::new();

pub fn init(level: &str) -> Result<()> {
    INITIALIZED
        .get_or_try_init(|| -> Result<String> {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(level))
                .map_err(|e| anyhow!("invalid log level '{}': {}", level, e))?;

            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

            debug!(level, "logging initialized");
            Ok(level.to_string())
        })
        .map(|_| ())
}
