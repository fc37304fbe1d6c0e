//! In-memory [`Fetcher`] for unit tests: canned bodies keyed by URL.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{FetchError, Fetcher};

#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    routes: HashMap<String, Result<Vec<u8>, u32>>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serves `body` with a 200 for `url`.
    pub(crate) fn route(mut self, url: &str, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(body.as_bytes().to_vec()));
        self
    }

    /// Answers `url` with a non-2xx status.
    pub(crate) fn status(mut self, url: &str, code: u32) -> Self {
        self.routes.insert(url.to_string(), Err(code));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for StubFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(code)) => Err(FetchError::Status { code: *code }),
            // Unrouted URLs behave like an unreachable host.
            None => Err(FetchError::Transport(curl::Error::new(7))),
        }
    }
}
