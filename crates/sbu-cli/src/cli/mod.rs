//! CLI for SBU.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use sbu_core::config::{self, SbuConfig};
use std::path::PathBuf;

use commands::{run_completions, run_info, run_man, run_urls};

/// Top-level CLI for SBU.
#[derive(Debug, Parser)]
#[command(name = "sbu", version)]
#[command(
    about = "Resolve Splunkbase app IDs to latest-release download URLs (SPLUNK_APPS_URL)",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Read configuration from this file instead of ~/.config/sbu/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Splunkbase API base (e.g. https://splunkbase.splunk.com/api/v1).
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Override the per-request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the comma-separated download URLs of the latest releases.
    Urls {
        /// Splunkbase app IDs (digits). Defaults to `default_apps` from config.
        ids: Vec<String>,

        /// Print name, version and URL of each app to stderr.
        #[arg(short, long)]
        verbose: bool,

        /// Print a shell `export SPLUNK_APPS_URL=...` line instead of the bare list.
        #[arg(long)]
        export: bool,
    },

    /// Show name, latest version and download URL for each app.
    Info {
        /// Splunkbase app IDs (digits). Defaults to `default_apps` from config.
        ids: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    /// Returns `Ok(false)` when some app ids failed to resolve.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => {
                run_completions(shell);
                return Ok(true);
            }
            CliCommand::Man => {
                run_man()?;
                return Ok(true);
            }
            _ => {}
        }

        let cfg = load_config(&cli.global)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Urls {
                ids,
                verbose,
                export,
            } => run_urls(&cfg, &select_ids(ids, &cfg), verbose, export),
            CliCommand::Info { ids } => run_info(&cfg, &select_ids(ids, &cfg)),
            CliCommand::Completions { .. } | CliCommand::Man => Ok(true),
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(global: &GlobalArgs) -> Result<SbuConfig> {
    let mut cfg = match &global.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    apply_overrides(&mut cfg, global);
    cfg.validate()?;
    Ok(cfg)
}

fn apply_overrides(cfg: &mut SbuConfig, global: &GlobalArgs) {
    if let Some(api_base) = &global.api_base {
        cfg.api_base = api_base.clone();
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout_secs = timeout;
    }
}

/// Command-line ids win; otherwise fall back to the configured defaults.
fn select_ids(ids: Vec<String>, cfg: &SbuConfig) -> Vec<String> {
    if ids.is_empty() {
        cfg.default_apps.clone()
    } else {
        ids
    }
}

#[cfg(test)]
mod tests;
