use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Log file name inside the user directory
pub const LOG_FILE: &str = "penmate.log";

/// Send `tracing` output to `<user_dir>/penmate.log`.
///
/// The terminal is in raw mode while the app runs, so nothing may be written
/// to stderr. The level defaults to `warn` and follows `RUST_LOG` when set.
pub fn init(user_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(user_dir)
        .with_context(|| format!("Failed to create {}", user_dir.display()))?;

    let path = user_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}
