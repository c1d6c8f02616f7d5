//! File collaborators: the fetched ID list and the association snapshot.
//!
//! Encoding and whitespace normalization happen here; the engine only ever
//! sees trimmed, non-empty ID strings.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use geoxref_core::MarkerKey;

/// Read the EntrezGene ID list, one ID per line.
///
/// Blank lines are skipped; duplicates are kept. The load processes every
/// input line independently.
pub fn read_id_list(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Read the tab-delimited `accession<TAB>marker_key` snapshot.
pub fn read_associations(path: &Path) -> Result<Vec<(String, MarkerKey)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut associations = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (accession, marker) = line
            .split_once('\t')
            .with_context(|| format!("line {}: expected accession<TAB>marker_key", lineno + 1))?;
        let marker: MarkerKey = marker
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad marker key {:?}", lineno + 1, marker))?;
        associations.push((accession.trim().to_string(), marker));
    }
    Ok(associations)
}
