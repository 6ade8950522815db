//! `corsprobe [URL]` – run the preflight and GET checks and print the report.

use anyhow::{Context, Result};
use corsprobe_core::config::ProbeConfig;
use corsprobe_core::http::CurlTransport;
use corsprobe_core::{report, CorsProbe};
use std::io::{self, Write};

/// Probe failures are part of the printed report; only a broken stdout is an error.
pub fn run_probe(url: &str, cfg: &ProbeConfig) -> Result<()> {
    let probe = CorsProbe::new(url, CurlTransport::new(cfg.request_options()));
    let mut out = io::stdout().lock();

    // Sections are printed as each request finishes, like the checks run.
    let preflight = probe.preflight();
    report::render_preflight(&preflight, &mut out).context("write report")?;
    writeln!(out).context("write report")?;
    out.flush().context("write report")?;

    let functional = probe.functional();
    report::render_functional(&functional, &mut out).context("write report")?;
    out.flush().context("write report")?;

    tracing::info!(
        url = probe.url(),
        preflight_ok = preflight.is_ok(),
        functional_ok = functional.is_ok(),
        "probe finished"
    );
    Ok(())
}
