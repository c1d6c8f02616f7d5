//! # geoxref-loader
//!
//! File collaborators and run driver for the GEO cross-reference load.
//! The binary in `main.rs` is a thin wrapper around [`run`].

pub mod input;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use geoxref_core::LoadConfig;
use geoxref_reconcile::{bcp, report, ReconcileEngine, RunSummary};

/// Execute one load against the files named in the manifest.
///
/// Both output files are opened only after the engine finishes, so a fatal
/// classification or generation error leaves nothing partially written.
pub fn run(config: &LoadConfig, load_date: DateTime<Utc>) -> Result<RunSummary> {
    let requested = input::read_id_list(&config.input_file)
        .with_context(|| format!("cannot read input file {}", config.input_file.display()))?;
    let associations = input::read_associations(&config.association_file).with_context(|| {
        format!(
            "cannot read association file {}",
            config.association_file.display()
        )
    })?;

    let outcome = ReconcileEngine::run(&requested, associations, &config.keys, load_date)?;

    let mut report_out = BufWriter::new(File::create(&config.report_file).with_context(
        || format!("cannot open report file {}", config.report_file.display()),
    )?);
    report::write_discrepancy_report(
        &mut report_out,
        &outcome.classification.discrepancies,
        load_date,
    )?;
    report_out.flush()?;

    let mut bcp_out = BufWriter::new(File::create(&config.bcp_file).with_context(
        || format!("cannot open bcp file {}", config.bcp_file.display()),
    )?);
    bcp::write_bcp(&mut bcp_out, &outcome.records)?;
    bcp_out.flush()?;

    info!(
        requested = outcome.summary.requested,
        discrepancies = outcome.summary.discrepancies,
        records = outcome.summary.records,
        "load finished"
    );
    Ok(outcome.summary)
}
