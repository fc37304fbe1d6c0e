//! Error types for app resolution and batch formatting.

use thiserror::Error;

use crate::http::FetchError;

/// Why a single identifier could not be resolved to a download URL.
///
/// Every variant carries the offending identifier so diagnostics can name it.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Identifier is not all ASCII digits; no request was made.
    #[error("invalid app id {app_id:?}: expected digits only")]
    InvalidIdentifier { app_id: String },

    /// Either request failed at the transport level or returned a non-2xx status.
    #[error("error fetching details for app {app_id}: {source}")]
    Network {
        app_id: String,
        #[source]
        source: FetchError,
    },

    /// Response body was not the JSON shape we expect.
    #[error("unexpected response structure for app {app_id} ({endpoint}): {source}")]
    Parse {
        app_id: String,
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Release list was empty or its first entry had no version name.
    #[error("no releases found for app {app_id}")]
    NoReleasesFound { app_id: String },
}

impl ResolveError {
    pub fn app_id(&self) -> &str {
        match self {
            ResolveError::InvalidIdentifier { app_id }
            | ResolveError::Network { app_id, .. }
            | ResolveError::Parse { app_id, .. }
            | ResolveError::NoReleasesFound { app_id } => app_id,
        }
    }

    /// Parse failures count as network failures for batch accounting.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ResolveError::Network { .. } | ResolveError::Parse { .. }
        )
    }
}

/// Batch-level failure. Per-identifier failures never surface here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no app ids given")]
    EmptyInput,
}
