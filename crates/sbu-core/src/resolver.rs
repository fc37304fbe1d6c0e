//! Resolve one app id to its name, latest version, and download URL.
//!
//! Two sequential GETs per app (metadata, then releases). No retries and
//! no caching: calling [`AppInfoResolver::resolve`] twice hits the API twice.

use crate::app_id::AppId;
use crate::error::ResolveError;
use crate::http::{classify, Fetcher};
use crate::splunkbase::{parse_app_details, parse_latest_release, Endpoints};

/// Resolved metadata for one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub app_id: AppId,
    /// App title, or "Unknown" when the API did not provide one.
    pub name: String,
    /// Version string of the newest release.
    pub version: String,
    pub download_url: String,
}

/// Resolves app ids against the Splunkbase API through a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct AppInfoResolver<F> {
    fetcher: F,
    endpoints: Endpoints,
}

impl<F: Fetcher> AppInfoResolver<F> {
    pub fn new(fetcher: F, api_base: &str) -> Self {
        Self::with_endpoints(fetcher, Endpoints::new(api_base))
    }

    pub fn with_endpoints(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Validates `raw_id` and resolves it. Invalid ids never reach the network.
    pub fn resolve(&self, raw_id: &str) -> Result<AppInfo, ResolveError> {
        let app_id = AppId::parse(raw_id)?;
        self.resolve_id(&app_id)
    }

    pub fn resolve_id(&self, app_id: &AppId) -> Result<AppInfo, ResolveError> {
        let details = self.fetch(
            app_id,
            &self.endpoints.app_url(app_id),
            "app",
            parse_app_details,
        )?;
        let name = details.display_name().to_string();

        let latest = self.fetch(
            app_id,
            &self.endpoints.release_url(app_id),
            "release",
            parse_latest_release,
        )?;
        let version = latest
            .as_ref()
            .and_then(|release| release.version())
            .ok_or_else(|| ResolveError::NoReleasesFound {
                app_id: app_id.to_string(),
            })?
            .to_string();

        let download_url = self.endpoints.download_url(app_id, &version);
        tracing::debug!(app_id = %app_id, %name, %version, "resolved");

        Ok(AppInfo {
            app_id: app_id.clone(),
            name,
            version,
            download_url,
        })
    }

    fn fetch<T>(
        &self,
        app_id: &AppId,
        url: &str,
        endpoint: &'static str,
        parse: fn(&[u8]) -> serde_json::Result<T>,
    ) -> Result<T, ResolveError> {
        tracing::debug!(app_id = %app_id, url, "GET {}", endpoint);
        let body = self.fetcher.get(url).map_err(|source| {
            tracing::debug!(app_id = %app_id, kind = %classify(&source), "GET {} failed", endpoint);
            ResolveError::Network {
                app_id: app_id.to_string(),
                source,
            }
        })?;
        parse(&body).map_err(|source| ResolveError::Parse {
            app_id: app_id.to_string(),
            endpoint,
            source,
        })
    }
}
