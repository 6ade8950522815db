//! Probe failure type.
//!
//! Every failure of a probe operation lands in one of these variants. The
//! `Display` output is the underlying error's own message so the console
//! report shows what the client or decoder actually said.

use thiserror::Error;

/// Failure of a single probe operation (preflight or GET).
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The client rejected the URL (malformed, unsupported scheme).
    #[error("{0}")]
    InvalidUrl(#[source] curl::Error),
    /// Connect or transfer timed out.
    #[error("{0}")]
    Timeout(#[source] curl::Error),
    /// DNS, refused or reset connection, TLS handshake, send/recv failure.
    #[error("{0}")]
    Connection(#[source] curl::Error),
    /// Any other client failure.
    #[error("{0}")]
    Transport(#[source] curl::Error),
    /// GET body is not valid JSON.
    #[error("{0}")]
    Decode(#[source] serde_json::Error),
}

impl ProbeError {
    /// Classify a curl error into a probe error variant.
    pub fn from_curl(e: curl::Error) -> Self {
        if e.is_url_malformed() || e.is_unsupported_protocol() {
            return ProbeError::InvalidUrl(e);
        }
        if e.is_operation_timedout() {
            return ProbeError::Timeout(e);
        }
        if e.is_couldnt_connect()
            || e.is_couldnt_resolve_host()
            || e.is_couldnt_resolve_proxy()
            || e.is_ssl_connect_error()
            || e.is_peer_failed_verification()
            || e.is_read_error()
            || e.is_recv_error()
            || e.is_send_error()
            || e.is_got_nothing()
        {
            return ProbeError::Connection(e);
        }
        ProbeError::Transport(e)
    }

    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::InvalidUrl(_) => "invalid-url",
            ProbeError::Timeout(_) => "timeout",
            ProbeError::Connection(_) => "connection",
            ProbeError::Transport(_) => "transport",
            ProbeError::Decode(_) => "decode",
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::from_curl(e)
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::Decode(e)
    }
}
