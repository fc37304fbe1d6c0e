//! Blocking HTTP GET for the Splunkbase JSON API.
//!
//! Uses the curl crate (libcurl). One request at a time, no retries: a
//! timeout or connection failure is reported to the caller as-is.

mod classify;
mod error;
#[cfg(test)]
pub(crate) mod stub;

pub use classify::{classify, classify_curl_error, TransportKind};
pub use error::FetchError;

use std::time::Duration;

/// Default hard timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for the connect phase; never longer than the total timeout.
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of response bodies for a URL.
///
/// The resolver only depends on this trait, so tests can serve canned
/// payloads without a network.
pub trait Fetcher {
    /// GETs `url` and returns the full body of a 2xx response.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

/// libcurl-backed [`Fetcher`].
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    timeout: Duration,
    user_agent: String,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, default_user_agent())
    }
}

impl CurlFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn connect_timeout(&self) -> Duration {
        self.timeout.min(MAX_CONNECT_TIMEOUT)
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout())?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status { code });
        }

        tracing::trace!(url, bytes = body.len(), "GET ok");
        Ok(body)
    }
}

pub fn default_user_agent() -> String {
    format!("sbu/{}", env!("CARGO_PKG_VERSION"))
}
