//! Bounded worker pool: a shared queue of URLs, a fixed number of OS threads
//! pulling from it, and a channel carrying results back as they complete.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Mutex, PoisonError};
use std::thread;

use crate::measure::{Measure, ProbeError, Sample};

/// Measures every URL with at most `max_threads` in flight and hands each
/// result to `on_result` on the calling thread, in completion order.
/// Returns once every worker has exited.
pub(super) fn run_pool<F>(urls: &[String], measure: &dyn Measure, max_threads: usize, mut on_result: F)
where
    F: FnMut(String, Result<Sample, ProbeError>),
{
    let count = urls.len();
    if count == 0 {
        return;
    }
    let work: Mutex<VecDeque<String>> = Mutex::new(urls.iter().cloned().collect());
    let (tx, rx) = mpsc::channel();
    let num_workers = max_threads.max(1).min(count);

    thread::scope(|scope| {
        for _ in 0..num_workers {
            let tx = tx.clone();
            let work = &work;
            scope.spawn(move || loop {
                let next = work
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();
                let Some(url) = next else {
                    break;
                };
                let outcome = measure_guarded(measure, &url);
                if tx.send((url, outcome)).is_err() {
                    break;
                }
            });
        }
        drop(tx);

        for (url, outcome) in rx {
            on_result(url, outcome);
        }
    });
}

/// A panicking strategy counts as a failed measurement instead of taking the
/// worker (and the rest of its queue) down with it.
fn measure_guarded(measure: &dyn Measure, url: &str) -> Result<Sample, ProbeError> {
    panic::catch_unwind(AssertUnwindSafe(|| measure.measure(url)))
        .unwrap_or_else(|payload| Err(ProbeError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
