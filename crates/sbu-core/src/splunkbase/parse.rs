//! Minimal Splunkbase API structures: only the fields we consume.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Name reported when the app metadata has no usable `title`.
pub const UNKNOWN_APP_NAME: &str = "Unknown";

/// `GET /app/{id}` response. Everything except `title` is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AppDetails {
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
}

impl AppDetails {
    /// Title, or [`UNKNOWN_APP_NAME`] when absent, null, blank, or not a string.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNKNOWN_APP_NAME)
    }
}

/// One entry of `GET /app/{id}/release`. `name` is the version string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
}

impl Release {
    /// Version string, if present and non-blank.
    pub fn version(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Any JSON value; only strings are kept.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

pub fn parse_app_details(body: &[u8]) -> serde_json::Result<AppDetails> {
    serde_json::from_slice(body)
}

/// Parses a release list (newest first) and returns its head.
///
/// The body must be a JSON array (or `null`, read as empty). Entries after
/// the first are not inspected; a head that is not an object yields a
/// release without a version.
pub fn parse_latest_release(body: &[u8]) -> serde_json::Result<Option<Release>> {
    let releases: Option<Vec<Value>> = serde_json::from_slice(body)?;
    Ok(releases
        .and_then(|list| list.into_iter().next())
        .map(|head| Release::deserialize(head).unwrap_or_default()))
}
