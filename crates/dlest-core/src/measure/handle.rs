//! One reusable curl handle per worker thread.
//!
//! `Easy::reset` clears options but keeps the connection cache, so a worker
//! measuring several URLs on the same host reuses its connections.

use curl::easy::Easy;
use std::cell::RefCell;
use std::time::Duration;

/// Upper bound on a single transfer, however steadily data keeps arriving.
const HARD_TIMEOUT: Duration = Duration::from_secs(3600);

thread_local! {
    static EASY: RefCell<Option<Easy>> = const { RefCell::new(None) };
}

/// Runs `f` with this thread's handle, freshly reset to defaults.
pub(super) fn with_handle<T>(f: impl FnOnce(&mut Easy) -> T) -> T {
    EASY.with(|cell| {
        let mut slot = cell.borrow_mut();
        let easy = slot.get_or_insert_with(Easy::new);
        easy.reset();
        f(easy)
    })
}

/// `timeout` bounds connecting and any stretch with no data received; a
/// transfer that keeps making progress runs until `HARD_TIMEOUT`.
///
/// libcurl measures the stall window in whole seconds, so it never drops below 1 s.
pub(super) fn apply_timeouts(easy: &mut Easy, timeout: Duration) -> Result<(), curl::Error> {
    easy.connect_timeout(timeout)?;
    easy.low_speed_limit(1)?;
    easy.low_speed_time(timeout.max(Duration::from_secs(1)))?;
    easy.timeout(HARD_TIMEOUT.max(timeout))?;
    Ok(())
}
