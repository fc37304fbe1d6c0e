//! `sbu info <ids>...` – show name, version and URL per app.

use anyhow::Result;
use sbu_core::config::SbuConfig;
use sbu_core::{BatchFormatter, BatchOptions};
use std::io;

use super::resolver_from_config;

pub fn run_info(cfg: &SbuConfig, ids: &[String]) -> Result<bool> {
    let resolver = resolver_from_config(cfg);
    let formatter = BatchFormatter::new(&resolver, BatchOptions::default());
    let outcome = formatter.format(ids, &mut io::stderr().lock())?;

    if outcome.resolved.is_empty() {
        println!("No apps resolved.");
    } else {
        println!("{:<8} {:<40} {:<12} {}", "APP ID", "NAME", "VERSION", "URL");
        for app in &outcome.resolved {
            println!(
                "{:<8} {:<40} {:<12} {}",
                app.app_id, app.name, app.version, app.download_url
            );
        }
    }
    println!();
    println!("{}={}", cfg.env_var, outcome.joined());

    Ok(outcome.is_complete())
}
