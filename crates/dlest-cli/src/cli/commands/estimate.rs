//! `dlest estimate <path>` – extract, measure, summarize.

use anyhow::Result;
use dlest_core::config::DlestConfig;
use dlest_core::dispatch;
use dlest_core::measure::Mode;
use dlest_core::report::{format_duration, format_size, Summary};
use dlest_core::{document, extract};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Command-line overrides; `None` falls back to the config value.
#[derive(Debug, Clone, Default)]
pub struct EstimateArgs {
    pub mode: Option<Mode>,
    pub max_threads: Option<usize>,
    pub bandwidth: Option<u64>,
    pub json: bool,
}

#[derive(Serialize)]
struct EstimateOutput<'a> {
    mode: Mode,
    max_threads: usize,
    /// Span of the whole batch; smaller than `total_secs` when requests overlap.
    wall_clock_secs: f64,
    #[serde(flatten)]
    summary: &'a Summary,
}

pub fn run_estimate(cfg: &DlestConfig, path: &Path, args: &EstimateArgs) -> Result<()> {
    let doc = document::load_path(path)?;
    let urls = extract::extract_urls(&doc);
    if urls.is_empty() {
        anyhow::bail!("no URLs found in {}", path.display());
    }

    let mode = args.mode.unwrap_or(cfg.mode);
    let max_threads = args.max_threads.unwrap_or(cfg.max_threads);
    let bandwidth = args.bandwidth.unwrap_or(cfg.assumed_bytes_per_sec);
    tracing::info!(
        path = %path.display(),
        urls = urls.len(),
        %mode,
        max_threads,
        "estimating"
    );

    let measure = cfg.measure(mode);
    let started = Instant::now();
    let agg = dispatch::measure_all_with_progress(&urls, &measure, max_threads, |record, p| {
        eprintln!(
            "[{}/{}] {:>10}  {}",
            p.done,
            p.total,
            format_size(record.byte_size),
            record.url
        );
    });
    let wall_clock_secs = started.elapsed().as_secs_f64();

    let summary = Summary::from_aggregate(&agg, bandwidth);
    if args.json {
        let out = EstimateOutput {
            mode,
            max_threads,
            wall_clock_secs,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{summary}");
        println!(
            "Wall clock:  {} (batch span; requests overlap)",
            format_duration(wall_clock_secs)
        );
    }
    Ok(())
}
