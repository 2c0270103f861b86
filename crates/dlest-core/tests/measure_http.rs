//! Integration tests: curl strategies and the dispatcher against a local server.

mod common;

use common::test_server::{self, TestServerOptions};
use dlest_core::dispatch::measure_all;
use dlest_core::measure::{CurlMeasure, Measure, Mode, ProbeError};
use std::time::Duration;

#[test]
fn fast_mode_reads_declared_length_and_times_request() {
    let mut opts = TestServerOptions::with_body(Vec::new());
    opts.head_length = Some("2048".to_string());
    opts.delay = Duration::from_millis(500);
    let url = test_server::start(opts);

    let sample = CurlMeasure::new(Mode::Fast).measure(&url).expect("HEAD");
    assert_eq!(sample.bytes, 2048);
    let secs = sample.elapsed.as_secs_f64();
    assert!(secs >= 0.45, "elapsed {secs}");
    assert!(secs < 5.0, "elapsed {secs}");
}

#[test]
fn fast_mode_missing_length_is_zero() {
    let mut missing = TestServerOptions::with_body(vec![1; 10]);
    missing.head_length = None;
    let url = test_server::start(missing);
    assert_eq!(CurlMeasure::new(Mode::Fast).measure(&url).unwrap().bytes, 0);
}

#[test]
fn accurate_mode_counts_real_body_bytes() {
    let body: Vec<u8> = (0u8..=255).cycle().take(50_000).collect();
    let mut opts = TestServerOptions::with_body(body);
    opts.head_length = Some("999".to_string());
    let url = test_server::start(opts);

    let accurate = CurlMeasure::new(Mode::Accurate).measure(&url).expect("GET");
    assert_eq!(accurate.bytes, 50_000);
    let fast = CurlMeasure::new(Mode::Fast).measure(&url).expect("HEAD");
    assert_eq!(fast.bytes, 999);
}

#[test]
fn refused_connection_is_an_error() {
    let url = test_server::refused_url();
    let err = CurlMeasure::new(Mode::Fast).measure(&url).unwrap_err();
    assert!(matches!(err, ProbeError::Curl(_)));
}

#[test]
fn batch_with_one_failure_sums_the_rest() {
    let a = test_server::start(TestServerOptions::with_body(vec![0; 1500]));
    let b = test_server::start(TestServerOptions::with_body(vec![0; 500]));
    let dead = test_server::refused_url();
    let urls = vec![a, dead.clone(), b];

    for mode in [Mode::Fast, Mode::Accurate] {
        let agg = measure_all(&urls, &CurlMeasure::new(mode), 10);
        assert_eq!(agg.records.len(), 3, "{mode}");
        assert_eq!(agg.total_bytes, 2000, "{mode}");
        let failed = agg.records.iter().find(|r| r.url == dead).unwrap();
        assert_eq!(failed.byte_size, 0);
        assert_eq!(failed.elapsed_secs, 0.0);
    }
}

#[test]
fn stalled_server_turns_into_zero_record() {
    let mut opts = TestServerOptions::with_body(vec![0; 100]);
    opts.delay = Duration::from_secs(5);
    let url = test_server::start(opts);

    let m = CurlMeasure::new(Mode::Fast).with_timeout(Duration::from_secs(1));
    let agg = measure_all(&[url], &m, 1);
    assert_eq!(agg.records.len(), 1);
    assert_eq!(agg.total_bytes, 0);
    assert_eq!(agg.total_secs, 0.0);
}

#[test]
fn accurate_mode_counts_slow_body_past_the_timeout() {
    let mut opts = TestServerOptions::with_body(vec![7; 20_000]);
    opts.trickle_pieces = 20;
    opts.trickle_gap = Duration::from_millis(100);
    let url = test_server::start(opts);

    let m = CurlMeasure::new(Mode::Accurate).with_timeout(Duration::from_secs(1));
    let sample = m.measure(&url).expect("steady transfer must not time out");
    assert_eq!(sample.bytes, 20_000);
    assert!(sample.elapsed >= Duration::from_secs(1), "{:?}", sample.elapsed);

    let agg = measure_all(&[url], &m, 1);
    assert_eq!(agg.total_bytes, 20_000);
    assert!(agg.total_secs >= 1.0);
}

#[test]
fn redirect_reports_the_final_response() {
    let mut target_opts = TestServerOptions::with_body(vec![1; 3000]);
    target_opts.head_length = Some("4096".to_string());
    let target = test_server::start(target_opts);

    let mut hop = TestServerOptions::with_body(Vec::new());
    hop.redirect_to = Some(target);
    let url = test_server::start(hop);

    let fast = CurlMeasure::new(Mode::Fast).measure(&url).expect("HEAD");
    assert_eq!(fast.bytes, 4096);
    let accurate = CurlMeasure::new(Mode::Accurate).measure(&url).expect("GET");
    assert_eq!(accurate.bytes, 3000);
}
