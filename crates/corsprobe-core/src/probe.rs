//! CORS probe: preflight (OPTIONS) and functional (GET) checks.
//!
//! Each operation catches its own failure and returns it as a value, so a
//! failed preflight never keeps the GET from running.

use crate::checklist::{self, HeaderCheck};
use crate::error::ProbeError;
use crate::http::{HeaderMap, Method, Transport};

/// Result of the OPTIONS request.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    pub status: u32,
    pub headers: HeaderMap,
    /// One entry per checklist header, in checklist order.
    pub checks: Vec<HeaderCheck>,
}

/// Result of the GET request with its body decoded as JSON.
#[derive(Debug, Clone)]
pub struct FunctionalReport {
    pub status: u32,
    pub body: serde_json::Value,
}

/// Both outcomes of one run.
#[derive(Debug)]
pub struct ProbeReport {
    pub preflight: Result<PreflightReport, ProbeError>,
    pub functional: Result<FunctionalReport, ProbeError>,
}

impl ProbeReport {
    /// Present/absent per checklist header; `None` if the preflight failed.
    pub fn presence(&self) -> Option<Vec<bool>> {
        self.preflight
            .as_ref()
            .ok()
            .map(|p| p.checks.iter().map(HeaderCheck::is_present).collect())
    }
}

pub struct CorsProbe<T> {
    url: String,
    transport: T,
}

impl<T: Transport> CorsProbe<T> {
    pub fn new(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send OPTIONS with no extra headers and check the CORS checklist.
    pub fn preflight(&self) -> Result<PreflightReport, ProbeError> {
        tracing::info!(url = %self.url, "preflight request");
        let resp = self
            .transport
            .send(Method::Options, &self.url)
            .inspect_err(|e| log_failure("preflight", e))?;
        let checks = checklist::check_headers(&resp.headers);
        let found = checks.iter().filter(|c| c.is_present()).count();
        tracing::info!(
            status = resp.status,
            found,
            expected = checks.len(),
            "preflight done"
        );
        Ok(PreflightReport {
            status: resp.status,
            headers: resp.headers,
            checks,
        })
    }

    /// Send GET and decode the body as JSON. Transport and decode failures
    /// share the error path.
    pub fn functional(&self) -> Result<FunctionalReport, ProbeError> {
        tracing::info!(url = %self.url, "functional request");
        let result = self
            .transport
            .send(Method::Get, &self.url)
            .and_then(|resp| {
                let body = serde_json::from_slice(&resp.body)?;
                Ok(FunctionalReport {
                    status: resp.status,
                    body,
                })
            });
        match &result {
            Ok(r) => tracing::info!(status = r.status, "functional done"),
            Err(e) => log_failure("functional", e),
        }
        result
    }

    /// Preflight to completion, then GET.
    pub fn run(&self) -> ProbeReport {
        let preflight = self.preflight();
        let functional = self.functional();
        ProbeReport {
            preflight,
            functional,
        }
    }
}

fn log_failure(op: &str, e: &ProbeError) {
    tracing::warn!(op, kind = e.kind(), "probe failed: {}", e);
}
