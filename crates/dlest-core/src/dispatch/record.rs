//! Per-URL records and the aggregate returned by the dispatcher.

use serde::Serialize;

use crate::measure::{ProbeError, Sample};

/// Outcome of measuring one URL. Failed measurements are recorded as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRecord {
    pub url: String,
    pub byte_size: u64,
    pub elapsed_secs: f64,
}

impl MeasurementRecord {
    /// Zero-sized, zero-time record.
    pub fn zero(url: String) -> Self {
        Self {
            url,
            byte_size: 0,
            elapsed_secs: 0.0,
        }
    }

    /// Maps a strategy result to a record. This is the only place a failed
    /// measurement becomes a zero contribution; the failure itself is logged
    /// but not kept, so the aggregate cannot tell it apart from an empty body.
    pub fn from_outcome(url: String, outcome: Result<Sample, ProbeError>) -> Self {
        match outcome {
            Ok(sample) => Self {
                url,
                byte_size: sample.bytes,
                elapsed_secs: sample.elapsed.as_secs_f64(),
            },
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "measurement failed, counting as zero");
                Self::zero(url)
            }
        }
    }
}

/// Summed size and time plus every record in completion order.
///
/// `total_secs` adds up per-request durations. With more than one worker the
/// requests overlap, so this is larger than the wall-clock time of the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub total_bytes: u64,
    pub total_secs: f64,
    pub records: Vec<MeasurementRecord>,
}

impl AggregateResult {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Adds a record and folds it into the totals.
    pub fn push(&mut self, record: MeasurementRecord) {
        self.total_bytes = self.total_bytes.saturating_add(record.byte_size);
        self.total_secs += record.elapsed_secs;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
