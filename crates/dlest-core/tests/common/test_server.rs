//! Minimal HTTP/1.1 server for measurement tests.
//!
//! Answers HEAD with a configurable `Content-Length` (possibly wrong or
//! missing) and GET with the real body, optionally trickled out in pieces.
//! Can also answer everything with a 302 to another URL. One request per
//! connection.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TestServerOptions {
    /// Body served to GET.
    pub body: Vec<u8>,
    /// `Content-Length` value sent with HEAD; `None` omits the header.
    pub head_length: Option<String>,
    /// Sleep before answering each request.
    pub delay: Duration,
    /// Send the GET body in this many pieces with `trickle_gap` between them.
    pub trickle_pieces: usize,
    pub trickle_gap: Duration,
    /// Answer every request with `302 Found` pointing here.
    pub redirect_to: Option<String>,
}

impl TestServerOptions {
    pub fn with_body(body: Vec<u8>) -> Self {
        let head_length = Some(body.len().to_string());
        Self {
            body,
            head_length,
            delay: Duration::ZERO,
            trickle_pieces: 1,
            trickle_gap: Duration::ZERO,
            redirect_to: None,
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(opts: TestServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a port nothing listens on, so connecting is refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &TestServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let method = request.split_whitespace().next().unwrap_or("").to_string();

    if !opts.delay.is_zero() {
        thread::sleep(opts.delay);
    }

    if let Some(location) = &opts.redirect_to {
        let filler = vec![b'x'; 154];
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            location,
            filler.len()
        );
        let _ = stream.write_all(response.as_bytes());
        if method.eq_ignore_ascii_case("GET") {
            let _ = stream.write_all(&filler);
        }
        return;
    }
    if method.eq_ignore_ascii_case("HEAD") {
        let length = opts
            .head_length
            .as_ref()
            .map(|v| format!("Content-Length: {}\r\n", v))
            .unwrap_or_default();
        let response = format!("HTTP/1.1 200 OK\r\n{}Connection: close\r\n\r\n", length);
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            opts.body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let piece = opts.body.len().div_ceil(opts.trickle_pieces.max(1)).max(1);
        for (i, chunk) in opts.body.chunks(piece).enumerate() {
            if i > 0 && !opts.trickle_gap.is_zero() {
                thread::sleep(opts.trickle_gap);
            }
            if stream.write_all(chunk).and_then(|_| stream.flush()).is_err() {
                return;
            }
        }
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
}
