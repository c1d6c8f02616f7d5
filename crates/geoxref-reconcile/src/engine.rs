//! ReconcileEngine: builds the index once, classifies, then generates.
//!
//! Both passes read the same index snapshot; nothing mutates it in
//! between.

use chrono::{DateTime, Utc};
use tracing::info;

use geoxref_core::{AssociationIndex, KeyAllocator, MarkerKey, RunKeys, XrefResult};

use crate::classify::{self, ClassificationOutcome};
use crate::generate::{self, CrossReferenceRecord, RunMetadata};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: usize,
    pub discrepancies: usize,
    pub records: usize,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub classification: ClassificationOutcome,
    pub records: Vec<CrossReferenceRecord>,
    pub summary: RunSummary,
}

/// The full reconciliation pass: one index build, one classification
/// pass, one generation pass. Strictly sequential.
pub struct ReconcileEngine;

impl ReconcileEngine {
    /// Run the reconciliation.
    ///
    /// Run keys are validated up front; nothing is produced when any key
    /// fails to resolve. A fatal generation error (malformed ID, invariant
    /// violation) aborts with no partial output.
    pub fn run(
        requested: &[String],
        associations: Vec<(String, MarkerKey)>,
        keys: &RunKeys,
        load_date: DateTime<Utc>,
    ) -> XrefResult<RunOutcome> {
        keys.validate()?;

        let index = AssociationIndex::build(associations);
        info!(
            associations = index.len(),
            requested = requested.len(),
            "association index built"
        );

        let classification = classify::classify(requested, &index);
        info!(
            discrepancies = classification.discrepancies.len(),
            "classification finished"
        );

        let mut allocator = KeyAllocator::new(keys.next_accession_key);
        let meta = RunMetadata {
            logical_db_key: keys.geo_logical_db_key,
            marker_type_key: keys.marker_type_key,
            created_by_key: keys.created_by_key,
            load_date,
        };
        let records = generate::generate(requested, &index, &classification, &mut allocator, &meta)?;
        info!(records = records.len(), "cross-reference generation finished");

        let summary = RunSummary {
            requested: requested.len(),
            discrepancies: classification.discrepancies.len(),
            records: records.len(),
        };
        Ok(RunOutcome {
            classification,
            records,
            summary,
        })
    }
}
