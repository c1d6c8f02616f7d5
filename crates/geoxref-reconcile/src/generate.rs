//! Cross-reference record generation.
//!
//! One new ACC_Accession row per surviving requested ID, in source order.
//! Generation trusts the exclusion set but verifies it: a surviving ID
//! without exactly one associated marker aborts the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use geoxref_core::{accession, AssociationIndex, KeyAllocator, MarkerKey, XrefError, XrefResult};

use crate::classify::ClassificationOutcome;

/// New rows are private to curators and preferred for display.
const PRIVATE: bool = true;
const PREFERRED: bool = true;

/// Fixed per-run metadata stamped onto every generated record.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    /// Logical db the new cross-references are filed under.
    pub logical_db_key: i64,
    /// MGI type key for marker records.
    pub marker_type_key: i64,
    /// Audit actor for the created-by/modified-by columns.
    pub created_by_key: i64,
    /// Load timestamp stamping creation and modification dates.
    pub load_date: DateTime<Utc>,
}

/// One new ACC_Accession row, fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReferenceRecord {
    pub accession_key: i64,
    pub accession: String,
    pub prefix_part: String,
    pub numeric_part: u64,
    pub logical_db_key: i64,
    pub marker_key: MarkerKey,
    pub marker_type_key: i64,
    pub private: bool,
    pub preferred: bool,
    pub created_by_key: i64,
    pub modified_by_key: i64,
    pub creation_date: DateTime<Utc>,
    pub modification_date: DateTime<Utc>,
}

/// Generate one record per surviving requested ID, in source order.
///
/// Duplicate non-excluded IDs each consume a key and emit a record; the
/// input is processed line by line, never deduplicated.
///
/// Two conditions abort the run:
/// - a surviving ID with zero or multiple associated markers
///   ([`XrefError::AssociationInvariant`] — the classifier and this pass
///   read the same snapshot, so they can only disagree through a bug);
/// - an accession ID with no numeric suffix
///   ([`XrefError::MalformedIdentifier`] — a data-quality failure upstream,
///   not an association discrepancy).
pub fn generate(
    requested: &[String],
    index: &AssociationIndex,
    outcome: &ClassificationOutcome,
    allocator: &mut KeyAllocator,
    meta: &RunMetadata,
) -> XrefResult<Vec<CrossReferenceRecord>> {
    let mut records = Vec::new();

    for id in requested {
        if outcome.is_excluded(id) {
            continue;
        }

        let marker = match index.sole_marker(id) {
            Some(marker) => marker,
            None => {
                return Err(XrefError::AssociationInvariant {
                    accession: id.clone(),
                    marker_count: index.marker_count(id),
                });
            }
        };

        let parts = accession::split(id)?;

        records.push(CrossReferenceRecord {
            accession_key: allocator.allocate(),
            accession: id.clone(),
            prefix_part: parts.prefix,
            numeric_part: parts.numeric,
            logical_db_key: meta.logical_db_key,
            marker_key: marker,
            marker_type_key: meta.marker_type_key,
            private: PRIVATE,
            preferred: PREFERRED,
            created_by_key: meta.created_by_key,
            modified_by_key: meta.created_by_key,
            creation_date: meta.load_date,
            modification_date: meta.load_date,
        });
    }

    Ok(records)
}
