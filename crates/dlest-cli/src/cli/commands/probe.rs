//! `dlest probe <url>` – measure one URL and show the raw result.

use anyhow::{Context, Result};
use dlest_core::config::DlestConfig;
use dlest_core::measure::{Measure, Mode};
use dlest_core::report::{format_duration, format_size};

pub fn run_probe(cfg: &DlestConfig, url: &str, mode: Option<Mode>) -> Result<()> {
    let mode = mode.unwrap_or(cfg.mode);
    let sample = cfg
        .measure(mode)
        .measure(url)
        .with_context(|| format!("{mode} probe of {url}"))?;
    println!(
        "{} ({} bytes) in {} [{}]",
        format_size(sample.bytes),
        sample.bytes,
        format_duration(sample.elapsed.as_secs_f64()),
        mode
    );
    Ok(())
}
