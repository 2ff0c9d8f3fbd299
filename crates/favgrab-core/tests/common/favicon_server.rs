//! Minimal HTTP/1.1 server that mimics the favicon service for integration tests.
//!
//! - `GET /api/<domain>` answers with the JSON registered for the domain, or
//!   404 `{"message":"Domain not found"}`.
//! - `GET /<domain>` and `GET /<domain>?larger=true` answer with PNG bytes.
//! - Domains listed in `slow` are answered only after `delay`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-favicon";
pub const LARGER_PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-favicon-larger";

#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Domain -> raw body served with 200 from `/api/<domain>`.
    pub lookups: HashMap<String, String>,
    /// Domains whose API answer is delayed.
    pub slow: Vec<String>,
    pub delay: Duration,
}

impl ServerOptions {
    pub fn with_lookup(mut self, domain: &str, body: &str) -> Self {
        self.lookups.insert(domain.to_string(), body.to_string());
        self
    }

    pub fn with_slow(mut self, domain: &str, delay: Duration) -> Self {
        self.slow.push(domain.to_string());
        self.delay = delay;
        self
    }
}

/// Starts a server in a background thread. Returns the origin
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// An origin nothing listens on.
pub fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &ServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let (status, content_type, body): (&str, &str, Vec<u8>) =
        if let Some(domain) = target.strip_prefix("/api/") {
            if opts.slow.iter().any(|d| d == domain) {
                thread::sleep(opts.delay);
            }
            match opts.lookups.get(domain) {
                Some(json) => ("200 OK", "application/json", json.clone().into_bytes()),
                None => (
                    "404 Not Found",
                    "application/json",
                    br#"{"message":"Domain not found"}"#.to_vec(),
                ),
            }
        } else if target.ends_with("?larger=true") {
            ("200 OK", "image/png", LARGER_PNG_BYTES.to_vec())
        } else if target.len() > 1 {
            ("200 OK", "image/png", PNG_BYTES.to_vec())
        } else {
            ("404 Not Found", "text/plain", b"not found".to_vec())
        };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}
