//! Discrepancy report formatting.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::classify::DiscrepancyRecord;

const HEADER_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Write the discrepancy report.
///
/// Layout matches the load's historical report: indented title and
/// timestamp, two fixed-width columns (ID 15, description 75), then a
/// trailing count of report lines.
pub fn write_discrepancy_report<W: Write>(
    out: &mut W,
    discrepancies: &[DiscrepancyRecord],
    timestamp: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "{}GEO Discrepancy Report", " ".repeat(26))?;
    writeln!(
        out,
        "{}({})",
        " ".repeat(24),
        timestamp.format(HEADER_DATE_FORMAT)
    )?;
    writeln!(out)?;
    writeln!(out, "{:<15}  {:<75}", "EntrezGene ID", "Discrepancy")?;
    writeln!(out, "{}  {}", "-".repeat(15), "-".repeat(75))?;

    for record in discrepancies {
        writeln!(out, "{:<15}  {:<75}", record.accession, record.kind.description())?;
    }

    writeln!(out)?;
    writeln!(out, "Number of discrepancies: {}", discrepancies.len())?;
    Ok(())
}
