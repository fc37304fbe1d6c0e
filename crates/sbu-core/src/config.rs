use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::default_user_agent;
use crate::splunkbase::DEFAULT_API_BASE;

/// Environment variable downstream tooling (e.g. docker-splunk) reads app URLs from.
pub const DEFAULT_ENV_VAR: &str = "SPLUNK_APPS_URL";

/// Global configuration loaded from `~/.config/sbu/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SbuConfig {
    /// Splunkbase API root; `/app/{id}` is appended per request.
    pub api_base: String,
    /// Hard timeout per HTTP request, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Variable name used by `--export`.
    pub env_var: String,
    /// App ids used when none are given on the command line.
    pub default_apps: Vec<String>,
}

impl Default for SbuConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 10,
            user_agent: default_user_agent(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            default_apps: Vec::new(),
        }
    }
}

impl SbuConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Rejects values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_base)
            .with_context(|| format!("invalid api_base {:?}", self.api_base))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("api_base must be http or https, got {:?}", self.api_base);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }
        if self.env_var.trim().is_empty() {
            anyhow::bail!("env_var must not be empty");
        }
        Ok(())
    }
}

const CONFIG_FILE_NAME: &str = "config.toml";

/// `~/.config/sbu/config.toml` (or under `$XDG_CONFIG_HOME`). Does not touch the disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sbu")?;
    Ok(xdg_dirs.get_config_home().join("sbu").join(CONFIG_FILE_NAME))
}

/// Load configuration from the default location, creating it if none exists.
pub fn load_or_init() -> Result<SbuConfig> {
    load_or_init_at(&config_path()?)
}

/// Load `path` if it exists; read and parse errors are returned as-is.
///
/// A missing file yields the defaults, written to `path` when possible.
/// An unwritable location only costs the file, not the run.
pub fn load_or_init_at(path: &Path) -> Result<SbuConfig> {
    if path.exists() {
        return load_from(path);
    }

    let default_cfg = SbuConfig::default();
    match write_config(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(e) => tracing::warn!("using built-in config: {:#}", e),
    }
    Ok(default_cfg)
}

fn write_config(path: &Path, cfg: &SbuConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<SbuConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SbuConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
