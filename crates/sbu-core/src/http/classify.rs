//! Classify fetch failures for diagnostics and log fields.

use std::fmt;

use super::FetchError;

/// Coarse category of a failed GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Request exceeded the configured timeout.
    Timeout,
    /// DNS, refused, reset, or empty reply.
    Connection,
    /// Server answered with a non-2xx status.
    Http(u32),
    /// Anything else curl reports (TLS, bad URL, ...).
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => f.write_str("timeout"),
            TransportKind::Connection => f.write_str("connection"),
            TransportKind::Http(code) => write!(f, "http-{}", code),
            TransportKind::Other => f.write_str("other"),
        }
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}

/// Classify a fetch error (curl or HTTP status).
pub fn classify(e: &FetchError) -> TransportKind {
    match e {
        FetchError::Transport(ce) => classify_curl_error(ce),
        FetchError::Status { code } => TransportKind::Http(*code),
    }
}
