//! Logging init: append to a file under the XDG state dir, else stderr.
//!
//! stdout carries the URL list, so log output never goes there. `RUST_LOG`
//! overrides the default filter of either target.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "sbu.log";
const DEFAULT_FILE_FILTER: &str = "info,sbu_core=debug";
/// Quieter on stderr: per-app problems are already reported as diagnostics.
const DEFAULT_STDERR_FILTER: &str = "warn";

/// Where log records end up after [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Installs the global subscriber: `~/.local/state/sbu/sbu.log` when it can
/// be opened, stderr otherwise. Never fails; a second call is a no-op.
pub fn init_logging() -> LogTarget {
    let opened = xdg::BaseDirectories::with_prefix("sbu")
        .context("locate XDG state dir")
        .and_then(|dirs| {
            let dir = dirs.get_state_home();
            open_log_file(&dir.join("sbu"))
        });

    match opened {
        Ok((path, file)) => {
            install(BoxMakeWriter::new(Arc::new(file)), DEFAULT_FILE_FILTER);
            tracing::info!("sbu logging initialized at {}", path.display());
            LogTarget::File(path)
        }
        Err(e) => {
            install(BoxMakeWriter::new(io::stderr), DEFAULT_STDERR_FILTER);
            tracing::debug!("file logging unavailable: {:#}", e);
            LogTarget::Stderr
        }
    }
}

/// Creates `dir` if needed and opens `dir/sbu.log` for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((path, file))
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn install(writer: BoxMakeWriter, default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(default_filter))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}
