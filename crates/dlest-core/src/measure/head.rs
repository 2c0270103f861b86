//! Fast mode: HEAD request, size from `Content-Length`.

use std::str;
use std::time::{Duration, Instant};

use super::handle::{apply_timeouts, with_handle};
use super::parse::content_length;
use super::{ProbeError, Sample};

/// Sends a HEAD request and reads the declared size of the final response.
/// Redirects are followed, so the size is that of the redirect target rather
/// than of the 3xx hop. A missing or non-numeric `Content-Length` counts as 0 bytes.
pub(super) fn probe_head(url: &str, timeout: Duration) -> Result<Sample, ProbeError> {
    with_handle(|easy| -> Result<Sample, ProbeError> {
        let mut headers: Vec<String> = Vec::new();

        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        apply_timeouts(easy, timeout)?;

        let start = Instant::now();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }
        let elapsed = start.elapsed();

        let bytes = content_length(&headers);
        tracing::trace!(url, bytes, ?elapsed, "HEAD done");
        Ok(Sample { bytes, elapsed })
    })
}
