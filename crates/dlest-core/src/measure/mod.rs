//! Per-URL measurement strategies.
//!
//! Two modes share one contract: given a URL, report how many bytes it
//! transfers and how long the request took.
//!
//! - [`Mode::Fast`]: HEAD request, size taken from `Content-Length`.
//! - [`Mode::Accurate`]: full GET, size is the number of body bytes received.
//!
//! Both use libcurl through the curl crate with a connect/stall timeout. A
//! network failure is returned as `Err`; turning it into a zero-valued record
//! is the dispatcher's job.

mod fetch;
mod handle;
mod head;
mod parse;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Connect and stall timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Receive buffer size for accurate mode; the body arrives in chunks of at most this many bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Which strategy to use for each URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Metadata-only HEAD probe.
    #[default]
    Fast,
    /// Full body fetch with byte counting.
    Accurate,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Fast => "fast",
            Mode::Accurate => "accurate",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown mode {0:?} (expected 1/fast or 2/accurate)")]
pub struct UnknownMode(pub String);

/// Accepts the form selector values `"1"`/`"2"` as well as the names.
impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "fast" => Ok(Mode::Fast),
            "2" | "accurate" => Ok(Mode::Accurate),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// A successful measurement of one URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Why a single measurement failed.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Timeout, refused connection, DNS failure, malformed response, ...
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The strategy panicked; caught by the dispatcher.
    #[error("measurement panicked: {0}")]
    Panicked(String),
}

/// A strategy that measures one URL. Shared by all dispatcher workers.
pub trait Measure: Send + Sync {
    fn measure(&self, url: &str) -> Result<Sample, ProbeError>;
}

/// libcurl-backed strategy for either mode.
#[derive(Debug, Clone, Copy)]
pub struct CurlMeasure {
    pub mode: Mode,
    pub timeout: Duration,
    pub chunk_size: usize,
}

impl CurlMeasure {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            timeout: DEFAULT_TIMEOUT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl Measure for CurlMeasure {
    fn measure(&self, url: &str) -> Result<Sample, ProbeError> {
        match self.mode {
            Mode::Fast => head::probe_head(url, self.timeout),
            Mode::Accurate => fetch::fetch_body(url, self.timeout, self.chunk_size),
        }
    }
}
