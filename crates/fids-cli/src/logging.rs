//! File logging.
//!
//! The terminal belongs to the board, so log lines go to a file instead of
//! stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::types::LogLevel;

pub fn default_log_path() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("fids").join("fids.log"));
    }
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".fids").join("fids.log"));
    }
    Err(anyhow!(
        "Could not determine log path: no HOME directory or XDG data directory found"
    ))
}

/// Append to `path`, creating parent directories as needed
pub fn init(path: &Path, level: LogLevel) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}
