//! Pull the declared body size out of raw header lines.

/// Returns the `Content-Length` of the last response in `lines`, or 0.
///
/// When redirects are followed curl reports the headers of every hop; a
/// status line (`HTTP/...`) starts a new response and clears what was seen.
pub(super) fn content_length(lines: &[String]) -> u64 {
    let mut length = 0;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            length = 0;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                length = value.trim().parse::<u64>().unwrap_or(0);
            }
        }
    }
    length
}
