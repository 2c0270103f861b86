use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::dispatch::DEFAULT_MAX_THREADS;
use crate::measure::{CurlMeasure, Mode, DEFAULT_CHUNK_SIZE};
use crate::report::DEFAULT_ASSUMED_BYTES_PER_SEC;

/// Global configuration loaded from `~/.config/dlest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DlestConfig {
    /// Maximum number of URLs measured at the same time.
    pub max_threads: usize,
    /// Strategy used when the command line does not pick one: "fast" or "accurate".
    pub mode: Mode,
    /// Seconds allowed for connecting, and for any stretch with no data received.
    pub timeout_secs: u64,
    /// Receive buffer size in bytes for accurate mode.
    pub chunk_size: usize,
    /// Bandwidth used for the projected download time, in bytes per second.
    pub assumed_bytes_per_sec: u64,
}

impl Default for DlestConfig {
    fn default() -> Self {
        Self {
            max_threads: DEFAULT_MAX_THREADS,
            mode: Mode::Fast,
            timeout_secs: 10,
            chunk_size: DEFAULT_CHUNK_SIZE,
            assumed_bytes_per_sec: DEFAULT_ASSUMED_BYTES_PER_SEC,
        }
    }
}

impl DlestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Curl strategy for `mode` with this config's timeout and chunk size.
    pub fn measure(&self, mode: Mode) -> CurlMeasure {
        CurlMeasure::new(mode)
            .with_timeout(self.timeout())
            .with_chunk_size(self.chunk_size)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DlestConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DlestConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DlestConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
