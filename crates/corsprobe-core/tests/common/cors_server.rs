//! Minimal HTTP/1.1 server answering OPTIONS and GET for integration tests.
//!
//! OPTIONS gets a 204 with the configured headers; GET gets the configured
//! status and body. Every request head is recorded for later inspection.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CorsServerOptions {
    /// Headers sent with the OPTIONS response.
    pub preflight_headers: Vec<(String, String)>,
    /// Extra OPTIONS header lines sent byte for byte (without CRLF).
    pub preflight_raw_lines: Vec<Vec<u8>>,
    pub get_status: u16,
    pub get_body: Vec<u8>,
}

impl Default for CorsServerOptions {
    fn default() -> Self {
        Self {
            preflight_headers: Vec::new(),
            preflight_raw_lines: Vec::new(),
            get_status: 200,
            get_body: br#"{"status": "ok"}"#.to_vec(),
        }
    }
}

impl CorsServerOptions {
    /// All four CORS headers with fixed values.
    pub fn permissive() -> Self {
        Self {
            preflight_headers: vec![
                ("Access-Control-Allow-Origin".into(), "*".into()),
                ("Access-Control-Allow-Methods".into(), "GET, POST, OPTIONS".into()),
                ("Access-Control-Allow-Headers".into(), "Content-Type, Authorization".into()),
                ("Access-Control-Allow-Credentials".into(), "true".into()),
            ],
            ..Self::default()
        }
    }
}

pub struct CorsServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CorsServer {
    /// Raw request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: CorsServerOptions) -> CorsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    {
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let opts = Arc::clone(&opts);
                let requests = Arc::clone(&requests);
                thread::spawn(move || handle(stream, &opts, &requests));
            }
        });
    }
    CorsServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// A URL on a port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8(data).ok()
}

fn handle(mut stream: TcpStream, opts: &CorsServerOptions, requests: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let head = match read_head(&mut stream) {
        Some(h) => h,
        None => return,
    };
    let method = head.split_whitespace().next().unwrap_or("").to_string();
    requests.lock().unwrap().push(head);

    if method.eq_ignore_ascii_case("OPTIONS") {
        let mut response = b"HTTP/1.1 204 No Content\r\n".to_vec();
        for (name, value) in &opts.preflight_headers {
            response.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }
        for line in &opts.preflight_raw_lines {
            response.extend_from_slice(line);
            response.extend_from_slice(b"\r\n");
        }
        response.extend_from_slice(b"Content-Length: 0\r\nConnection: close\r\n\r\n");
        let _ = stream.write_all(&response);
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            opts.get_status,
            opts.get_body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(&opts.get_body);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
}
