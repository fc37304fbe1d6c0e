//! Endpoint and download URL construction.

use crate::app_id::AppId;

/// Public Splunkbase API root.
pub const DEFAULT_API_BASE: &str = "https://splunkbase.splunk.com/api/v1";

const API_PATH: &str = "/api/v1";
const APP_PATH: &str = "/app";

/// Strips trailing slashes and an optional `/app` from the configured base,
/// yielding the API root (e.g. `https://splunkbase.splunk.com/api/v1`).
fn api_root(api_base: &str) -> &str {
    let trimmed = api_base.trim_end_matches('/');
    trimmed.strip_suffix(APP_PATH).unwrap_or(trimmed)
}

/// Public site root for an API base: `/api/v1` (and `/app`) removed.
///
/// `https://splunkbase.splunk.com/api/v1/app` → `https://splunkbase.splunk.com`.
/// A base without the API path is returned with trailing slashes removed.
pub fn site_root(api_base: &str) -> &str {
    let root = api_root(api_base);
    root.strip_suffix(API_PATH).unwrap_or(root)
}

/// URL layout derived once from the configured API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_root: String,
    site_root: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_root: api_root(api_base).to_string(),
            site_root: site_root(api_base).to_string(),
        }
    }

    /// `{api}/app/{id}`
    pub fn app_url(&self, app_id: &AppId) -> String {
        format!("{}{}/{}", self.api_root, APP_PATH, app_id)
    }

    /// `{api}/app/{id}/release`
    pub fn release_url(&self, app_id: &AppId) -> String {
        format!("{}{}/{}/release", self.api_root, APP_PATH, app_id)
    }

    /// `{site}/app/{id}/release/{version}/download/`
    pub fn download_url(&self, app_id: &AppId, version: &str) -> String {
        format!(
            "{}{}/{}/release/{}/download/",
            self.site_root, APP_PATH, app_id, version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AppId {
        AppId::parse(s).unwrap()
    }

    #[test]
    fn site_root_strips_api_suffix() {
        assert_eq!(
            site_root("https://splunkbase.splunk.com/api/v1/app"),
            "https://splunkbase.splunk.com"
        );
        assert_eq!(
            site_root("https://splunkbase.splunk.com/api/v1/"),
            "https://splunkbase.splunk.com"
        );
        assert_eq!(site_root("http://127.0.0.1:8080/"), "http://127.0.0.1:8080");
    }

    #[test]
    fn default_endpoints_match_upstream() {
        let e = Endpoints::default();
        assert_eq!(
            e.app_url(&id("4353")),
            "https://splunkbase.splunk.com/api/v1/app/4353"
        );
        assert_eq!(
            e.release_url(&id("4353")),
            "https://splunkbase.splunk.com/api/v1/app/4353/release"
        );
        assert_eq!(
            e.download_url(&id("4353"), "1.8.20"),
            "https://splunkbase.splunk.com/app/4353/release/1.8.20/download/"
        );
    }

    #[test]
    fn base_with_app_suffix_is_equivalent() {
        assert_eq!(
            Endpoints::new("https://splunkbase.splunk.com/api/v1/app/"),
            Endpoints::default()
        );
    }

    #[test]
    fn download_url_has_no_double_slash() {
        let e = Endpoints::new("http://127.0.0.1:9/api/v1//");
        let url = e.download_url(&id("7931"), "0.2.6");
        assert_eq!(url, "http://127.0.0.1:9/app/7931/release/0.2.6/download/");
        assert!(!url["http://".len()..].contains("//"));
    }
}
