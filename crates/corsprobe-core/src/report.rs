//! Console report over a ProbeReport.

use crate::error::ProbeError;
use crate::probe::{FunctionalReport, PreflightReport, ProbeReport};
use std::io::{self, Write};

const PASS: &str = "✅";
const FAIL: &str = "❌";

/// Write the full human-readable report.
pub fn render<W: Write>(report: &ProbeReport, out: &mut W) -> io::Result<()> {
    render_preflight(&report.preflight, out)?;
    writeln!(out)?;
    render_functional(&report.functional, out)
}

pub fn render_preflight<W: Write>(
    preflight: &Result<PreflightReport, ProbeError>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Testing CORS preflight request...")?;
    match preflight {
        Ok(p) => {
            writeln!(out, "OPTIONS Status: {}", p.status)?;
            writeln!(out, "CORS Headers: {}", p.headers)?;
            for check in &p.checks {
                match &check.value {
                    Some(v) => writeln!(out, "{} {}: {}", PASS, check.name, v)?,
                    None => writeln!(out, "{} {}: Not found", FAIL, check.name)?,
                }
            }
        }
        Err(e) => writeln!(out, "{} Error testing CORS: {}", FAIL, e)?,
    }
    Ok(())
}

pub fn render_functional<W: Write>(
    functional: &Result<FunctionalReport, ProbeError>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Testing actual GET request...")?;
    match functional {
        Ok(f) => {
            writeln!(out, "GET Status: {}", f.status)?;
            writeln!(out, "Response: {}", f.body)?;
        }
        Err(e) => writeln!(out, "{} Error testing GET: {}", FAIL, e)?,
    }
    Ok(())
}
