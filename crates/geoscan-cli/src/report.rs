//! Console rendering of a scan report.

use std::io::Write;

use geoscan_core::BatchReport;

/// Write the report as human readable text.
pub fn write_text<W: Write>(out: &mut W, report: &BatchReport) -> std::io::Result<()> {
    writeln!(out, "Files with GPS Metadata:")?;
    for (name, location) in &report.located {
        writeln!(
            out,
            "  {}: latitude={:.6} longitude={:.6} altitude={}",
            name,
            location.latitude,
            location.longitude,
            location.altitude.as_deref().unwrap_or("-")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Files without GPS Metadata:")?;
    for name in &report.without_metadata {
        writeln!(out, "  {}", name)?;
    }

    if !report.rejected.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unreadable files:")?;
        for (name, reason) in &report.rejected {
            writeln!(out, "  {}: {}", name, reason)?;
        }
    }
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &BatchReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
