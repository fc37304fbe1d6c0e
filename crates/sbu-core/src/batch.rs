//! Resolve a batch of app ids and join their download URLs.
//!
//! Ids are processed one after another in input order. A failed id is
//! reported on the diagnostic writer and counted; it never stops the batch.

use std::io::Write;

use crate::error::{BatchError, ResolveError};
use crate::http::Fetcher;
use crate::resolver::{AppInfo, AppInfoResolver};

/// Separator used when joining download URLs.
pub const URL_SEPARATOR: &str = ",";

/// Per-run knobs for [`BatchFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Write a name/version/url summary for each resolved app.
    pub verbose: bool,
}

/// Result of a batch: successes in input order plus every failure.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub resolved: Vec<AppInfo>,
    pub failures: Vec<ResolveError>,
}

impl BatchOutcome {
    /// Download URLs of the resolved apps, in input order.
    pub fn urls(&self) -> Vec<&str> {
        self.resolved
            .iter()
            .map(|info| info.download_url.as_str())
            .collect()
    }

    /// Comma-joined URLs; empty string when nothing resolved.
    pub fn joined(&self) -> String {
        self.urls().join(URL_SEPARATOR)
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// False means [`BatchOutcome::joined`] is partial.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct BatchFormatter<'a, F> {
    resolver: &'a AppInfoResolver<F>,
    options: BatchOptions,
}

impl<'a, F: Fetcher> BatchFormatter<'a, F> {
    pub fn new(resolver: &'a AppInfoResolver<F>, options: BatchOptions) -> Self {
        Self { resolver, options }
    }

    /// Resolves every id in order, writing diagnostics to `diag`.
    ///
    /// Only an empty `ids` slice is an error; per-id failures end up in
    /// [`BatchOutcome::failures`].
    pub fn format<S, W>(&self, ids: &[S], diag: &mut W) -> Result<BatchOutcome, BatchError>
    where
        S: AsRef<str>,
        W: Write,
    {
        if ids.is_empty() {
            return Err(BatchError::EmptyInput);
        }

        let mut outcome = BatchOutcome::default();
        for raw in ids {
            let raw = raw.as_ref();
            match self.resolver.resolve(raw) {
                Ok(info) => {
                    tracing::info!(
                        app_id = %info.app_id,
                        version = %info.version,
                        "resolved {}",
                        info.name
                    );
                    if self.options.verbose {
                        emit(diag, &summary(&info));
                    }
                    outcome.resolved.push(info);
                }
                Err(err) => {
                    tracing::debug!(app_id = raw, "resolve failed: {}", err);
                    emit(diag, &format!("error: {}\n", err));
                    outcome.failures.push(err);
                }
            }
        }

        tracing::info!(
            total = ids.len(),
            resolved = outcome.resolved.len(),
            failed = outcome.failure_count(),
            "batch done"
        );
        Ok(outcome)
    }
}

fn summary(info: &AppInfo) -> String {
    format!(
        "App ID: {}\nName: {}\nVersion: {}\nURL: {}\n\n",
        info.app_id, info.name, info.version, info.download_url
    )
}

/// Diagnostics are best effort; a broken stderr must not fail the batch.
fn emit<W: Write>(diag: &mut W, text: &str) {
    if let Err(e) = diag.write_all(text.as_bytes()) {
        tracing::warn!("failed to write diagnostics: {}", e);
    }
}
