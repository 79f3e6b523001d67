//! Diagnostics logging, kept apart from the interactive transcript

use crate::infrastructure::Config;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber writing to `config.log_file`.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Call once, before
/// the store is created.
pub fn init(config: &Config) -> Result<()> {
    let log_file = open_log_file(&config.log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(Arc::new(log_file))
        .try_init()
        .map_err(|e| anyhow!("failed to install diagnostics subscriber: {e}"))?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
