//! Validated Splunkbase application identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// Numeric application identifier (`^[0-9]+$`).
///
/// The only way to obtain one is through [`AppId::parse`], so anything
/// holding an `AppId` is safe to splice into a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    /// Accepts a non-empty string of ASCII digits. Whitespace is not trimmed.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ResolveError::InvalidIdentifier {
                app_id: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppId {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
