//! `sbu urls <ids>...` – print the comma-separated download URL list.

use anyhow::Result;
use sbu_core::config::SbuConfig;
use sbu_core::{BatchFormatter, BatchOptions};
use std::io;

use super::resolver_from_config;

/// Prints the joined URLs on stdout; diagnostics go to stderr.
/// Returns false when the list is partial.
pub fn run_urls(cfg: &SbuConfig, ids: &[String], verbose: bool, export: bool) -> Result<bool> {
    let resolver = resolver_from_config(cfg);
    let formatter = BatchFormatter::new(&resolver, BatchOptions { verbose });
    let outcome = formatter.format(ids, &mut io::stderr().lock())?;

    let joined = outcome.joined();
    if export {
        println!("{}", export_line(&cfg.env_var, &joined));
    } else {
        println!("{}", joined);
    }

    if !outcome.is_complete() {
        eprintln!(
            "warning: {} of {} app(s) failed; URL list is partial",
            outcome.failure_count(),
            ids.len()
        );
    }
    Ok(outcome.is_complete())
}

/// `export NAME='value'`, single-quoted for POSIX shells.
pub(crate) fn export_line(name: &str, value: &str) -> String {
    format!("export {}='{}'", name, value.replace('\'', r"'\''"))
}
