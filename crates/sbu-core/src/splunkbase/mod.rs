//! Splunkbase API payloads and URL layout.
//!
//! The API lives under `{site}/api/v1`; app metadata is at `/app/{id}`, the
//! release list (newest first) at `/app/{id}/release`, and the public
//! download page at `{site}/app/{id}/release/{version}/download/`.

mod endpoints;
mod parse;

pub use endpoints::{site_root, Endpoints, DEFAULT_API_BASE};
pub use parse::{parse_app_details, parse_latest_release, AppDetails, Release, UNKNOWN_APP_NAME};
