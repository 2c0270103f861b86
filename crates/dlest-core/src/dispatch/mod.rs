//! Concurrent dispatcher: measures a list of URLs with a bounded number of
//! worker threads and sums the results.
//!
//! Every input URL produces exactly one [`MeasurementRecord`], in the order the
//! measurements finish. Failures (and panics inside a strategy) become
//! zero-valued records; nothing escapes this boundary as an error.

mod pool;
mod record;

pub use record::{AggregateResult, MeasurementRecord};

use crate::measure::Measure;

/// Worker count used when the caller does not pick one.
pub const DEFAULT_MAX_THREADS: usize = 10;

/// How far a batch has got, passed along with each finished record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

/// Measures every URL in `urls` with at most `max_threads` requests in flight.
/// `max_threads == 0` is treated as 1. Blocks until the whole batch is done.
pub fn measure_all(urls: &[String], measure: &dyn Measure, max_threads: usize) -> AggregateResult {
    measure_all_with_progress(urls, measure, max_threads, |_, _| {})
}

/// Like [`measure_all`], calling `on_record` on the calling thread as each
/// record arrives.
pub fn measure_all_with_progress<F>(
    urls: &[String],
    measure: &dyn Measure,
    max_threads: usize,
    mut on_record: F,
) -> AggregateResult
where
    F: FnMut(&MeasurementRecord, Progress),
{
    let total = urls.len();
    let mut result = AggregateResult::with_capacity(total);
    tracing::debug!(urls = total, max_threads, "dispatching measurements");

    pool::run_pool(urls, measure, max_threads, |url, outcome| {
        let record = MeasurementRecord::from_outcome(url, outcome);
        let progress = Progress {
            done: result.len() + 1,
            total,
        };
        on_record(&record, progress);
        result.push(record);
    });

    tracing::debug!(
        urls = total,
        total_bytes = result.total_bytes,
        total_secs = result.total_secs,
        "batch finished"
    );
    result
}
