use crate::http::RequestOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Endpoint probed when neither the command line nor the config names one.
pub const DEFAULT_TARGET_URL: &str = "https://dermassist-app-qxzs.onrender.com/";

/// Global configuration loaded from `~/.config/corsprobe/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// URL both requests are sent to.
    pub target_url: String,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no limit, the libcurl default).
    pub timeout_secs: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl ProbeConfig {
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Load `config.toml` from the XDG config dirs, or defaults if there is none.
/// Never creates files or directories.
pub fn load_or_default() -> Result<ProbeConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("corsprobe")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path),
        None => Ok(ProbeConfig::default()),
    }
}

/// Load configuration from an explicit file; it must exist.
pub fn load_from(path: &Path) -> Result<ProbeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
