//! HTTP exchange layer.
//!
//! Uses the curl crate (libcurl) to send a single request and collect the
//! status, header lines and body. Requests carry no custom headers.

mod headers;
mod parse;

pub use headers::HeaderMap;

use crate::error::ProbeError;
use std::fmt;
use std::time::Duration;

/// Request methods the probe sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Options,
    Get,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Options => "OPTIONS",
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client settings. `None` leaves the libcurl default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Outcome of one completed exchange. Any status code counts as completed.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Sends one request and returns the response.
pub trait Transport {
    fn send(&self, method: Method, url: &str) -> Result<HttpResponse, ProbeError>;
}

/// Blocking libcurl transport. One Easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: RequestOptions,
}

impl CurlTransport {
    pub fn new(options: RequestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Transport for CurlTransport {
    /// Follows redirects. Runs in the current thread.
    fn send(&self, method: Method, url: &str) -> Result<HttpResponse, ProbeError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        match method {
            Method::Get => easy.get(true)?,
            Method::Options => easy.custom_request(method.as_str())?,
        }
        easy.follow_location(true)?;
        if let Some(d) = self.options.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.options.timeout {
            easy.timeout(d)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                header_lines.push(parse::decode_header_line(data));
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(%method, url, status, bytes = body.len(), "exchange complete");

        Ok(HttpResponse {
            status,
            headers: parse::parse_header_lines(&header_lines),
            body,
        })
    }
}
