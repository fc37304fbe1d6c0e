//! Transport error for a single GET.

use std::fmt;

/// Error returned by [`super::Fetcher::get`]: curl failure or non-2xx status.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection refused, etc.).
    Transport(curl::Error),
    /// Server answered with a non-2xx status.
    Status { code: u32 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Status { code } => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Status { .. } => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Transport(e)
    }
}
