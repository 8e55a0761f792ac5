// src/logging.rs
//! Log setup. The terminal is taken over by the UI, so logs go to a file.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,sheetpick=info";

/// Where the log file lives: `<cache dir>/sheetpick/sheetpick.log`.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("sheetpick").join("sheetpick.log"))
}

/// Install the global subscriber, appending to [`log_path`].
pub fn init() -> Result<PathBuf> {
    let path = log_path().context("no cache directory for the log file")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(path)
}
