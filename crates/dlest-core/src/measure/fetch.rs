//! Accurate mode: full GET, counting body bytes as they arrive.

use std::time::{Duration, Instant};

use super::handle::{apply_timeouts, with_handle};
use super::{ProbeError, Sample};

/// Downloads the body of `url` and discards it, returning the number of bytes
/// received. Elapsed time covers the whole transfer. `timeout` only ends a
/// transfer that stalls; a slow but steady body is counted in full.
pub(super) fn fetch_body(
    url: &str,
    timeout: Duration,
    chunk_size: usize,
) -> Result<Sample, ProbeError> {
    with_handle(|easy| -> Result<Sample, ProbeError> {
        let mut received: u64 = 0;

        easy.url(url)?;
        easy.follow_location(true)?;
        easy.buffer_size(chunk_size)?;
        apply_timeouts(easy, timeout)?;

        let start = Instant::now();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                received += data.len() as u64;
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let elapsed = start.elapsed();

        tracing::trace!(url, bytes = received, ?elapsed, "GET done");
        Ok(Sample {
            bytes: received,
            elapsed,
        })
    })
}
