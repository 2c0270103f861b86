//! tracing setup for dlest.
//!
//! Events go to `dlest.log` under the XDG state dir; per-URL failures and
//! batch totals land there while stdout stays reserved for the summary.
//! The filter comes from `RUST_LOG`, else [`DEFAULT_FILTER`].

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Core at debug so dispatch start/finish lines are kept.
pub const DEFAULT_FILTER: &str = "info,dlest_core=debug,dlest=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/dlest/dlest.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlest")?;
    Ok(xdg_dirs.get_state_home().join("dlest.log"))
}

/// Installs the global subscriber, appending to [`log_path`].
/// Errors if the state dir or file cannot be opened or a subscriber is
/// already installed; `main` then calls [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("dlest logging to {}", path.display());
    Ok(())
}

/// Same filter, written to stderr. A second install is ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
