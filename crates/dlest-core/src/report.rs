//! Human-readable summary of a finished batch.
//!
//! Sizes are shown in binary units (1 MB = 1024 * 1024 bytes) and time as a
//! minutes + seconds breakdown. Also projects how long the whole set would
//! take to download at an assumed bandwidth.

use serde::Serialize;
use std::fmt;

use crate::dispatch::AggregateResult;

pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Bandwidth assumed for the projected download time when none is configured.
pub const DEFAULT_ASSUMED_BYTES_PER_SEC: u64 = 1024;

pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MEGABYTE
}

/// Splits a duration in seconds into whole minutes and the remaining seconds,
/// rounded to hundredths first so the remainder never prints as `60.00`.
pub fn split_minutes(secs: f64) -> (u64, f64) {
    let centis = (secs.max(0.0) * 100.0).round();
    let minutes = (centis / 6000.0).floor();
    (minutes as u64, (centis - minutes * 6000.0) / 100.0)
}

/// Seconds needed to move `total_bytes` at `bytes_per_sec` (0 is treated as 1).
pub fn projected_secs(total_bytes: u64, bytes_per_sec: u64) -> f64 {
    total_bytes as f64 / bytes_per_sec.max(1) as f64
}

/// Formats a byte count with the largest unit that keeps the value >= 1.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = "B";
    for u in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = u;
    }
    format!("{value:.2} {unit}")
}

/// `"42.10s"` below a minute, `"3m 05.00s"` above.
pub fn format_duration(secs: f64) -> String {
    let (minutes, rest) = split_minutes(secs);
    if minutes == 0 {
        format!("{rest:.2}s")
    } else {
        format!("{minutes}m {rest:05.2}s")
    }
}

/// One line of the per-URL listing.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub url: String,
    pub byte_size: u64,
    pub elapsed_secs: f64,
    pub size: String,
    pub elapsed: String,
}

/// Everything the front end shows for a batch.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub url_count: usize,
    pub total_bytes: u64,
    pub total_megabytes: f64,
    /// Sum of per-request durations, not wall-clock time.
    pub total_secs: f64,
    pub minutes: u64,
    pub seconds: f64,
    pub assumed_bytes_per_sec: u64,
    pub projected_secs: f64,
    pub rows: Vec<Row>,
}

impl Summary {
    pub fn from_aggregate(agg: &AggregateResult, assumed_bytes_per_sec: u64) -> Self {
        let (minutes, seconds) = split_minutes(agg.total_secs);
        let rows = agg
            .records
            .iter()
            .map(|r| Row {
                url: r.url.clone(),
                byte_size: r.byte_size,
                elapsed_secs: r.elapsed_secs,
                size: format_size(r.byte_size),
                elapsed: format_duration(r.elapsed_secs),
            })
            .collect();
        Self {
            url_count: agg.records.len(),
            total_bytes: agg.total_bytes,
            total_megabytes: bytes_to_megabytes(agg.total_bytes),
            total_secs: agg.total_secs,
            minutes,
            seconds,
            assumed_bytes_per_sec: assumed_bytes_per_sec.max(1),
            projected_secs: projected_secs(agg.total_bytes, assumed_bytes_per_sec),
            rows,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.rows.is_empty() {
            writeln!(f, "{:>12}  {:>10}  URL", "SIZE", "TIME")?;
            for row in &self.rows {
                writeln!(f, "{:>12}  {:>10}  {}", row.size, row.elapsed, row.url)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "URLs:        {}", self.url_count)?;
        writeln!(
            f,
            "Total size:  {:.2} MB ({} bytes)",
            self.total_megabytes, self.total_bytes
        )?;
        writeln!(
            f,
            "Total time:  {} min {:.2} s (sum of request times)",
            self.minutes, self.seconds
        )?;
        let (pm, ps) = split_minutes(self.projected_secs.round());
        write!(
            f,
            "Projected:   {} min {:.0} s at {}/s",
            pm,
            ps,
            format_size(self.assumed_bytes_per_sec)
        )
    }
}
