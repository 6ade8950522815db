//! CLI for the corsprobe CORS diagnostic.

mod commands;

use anyhow::Result;
use clap::Parser;
use corsprobe_core::config::{self, ProbeConfig};
use std::path::{Path, PathBuf};

use commands::run_probe;

/// Send an OPTIONS preflight and a GET to a URL and report its CORS headers.
#[derive(Debug, Parser)]
#[command(name = "corsprobe")]
#[command(about = "Check a server's CORS preflight headers and GET response", long_about = None)]
pub struct Cli {
    /// URL to probe (defaults to `target_url` from the config file).
    pub url: Option<String>,

    /// Read configuration from this file instead of ~/.config/corsprobe/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref());
        tracing::debug!("loaded config: {:?}", cfg);

        let url = cli.url.unwrap_or_else(|| cfg.target_url.clone());
        run_probe(&url, &cfg)
    }
}

/// A config that cannot be loaded never stops the probe; defaults apply.
fn load_config(path: Option<&Path>) -> ProbeConfig {
    let loaded = match path {
        Some(p) => config::load_from(p),
        None => config::load_or_default(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("using default config: {:#}", e);
        ProbeConfig::default()
    })
}
