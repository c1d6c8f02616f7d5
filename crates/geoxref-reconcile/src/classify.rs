//! Discrepancy classification.
//!
//! Three checks over the association index decide which requested IDs get
//! excluded from cross-reference generation. Check order is the report
//! order; within a check, matches are reported in ascending ID order. An
//! ID can appear on more than one report line but lands in the exclusion
//! set once.

use std::collections::{BTreeSet, HashSet};

use geoxref_core::AssociationIndex;

/// The three association-ambiguity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscrepancyKind {
    /// The ID has no marker association at all.
    Unassociated,
    /// The ID is associated with more than one marker.
    MultipleMarkers,
    /// The ID's sole marker carries other EntrezGene associations too.
    SharedMarker,
}

impl DiscrepancyKind {
    /// Report line text, verbatim from the load's discrepancy report.
    pub fn description(&self) -> &'static str {
        match self {
            DiscrepancyKind::Unassociated => "EntrezGene ID not associated with a marker",
            DiscrepancyKind::MultipleMarkers => {
                "EntrezGene ID associated with multiple markers"
            }
            DiscrepancyKind::SharedMarker => {
                "EntrezGene ID associated with a marker that has multiple EG associations"
            }
        }
    }
}

/// One report line: an accession ID and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscrepancyRecord {
    pub accession: String,
    pub kind: DiscrepancyKind,
}

/// Classifier output: report lines plus the exclusion set handed to the
/// generator. Immutable once built.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClassificationOutcome {
    /// Report lines in check order, each check ascending by ID.
    pub discrepancies: Vec<DiscrepancyRecord>,
    /// Union of all three checks' matches.
    pub excluded: HashSet<String>,
}

impl ClassificationOutcome {
    pub fn is_excluded(&self, accession: &str) -> bool {
        self.excluded.contains(accession)
    }
}

/// Run the three discrepancy checks over the requested IDs.
///
/// Duplicates in the request collapse to one report line per check. The
/// classifier never fails and never mutates the index; no discrepancies
/// means empty outputs.
pub fn classify(requested: &[String], index: &AssociationIndex) -> ClassificationOutcome {
    // BTreeSet gives both the dedup and the ascending report order.
    let distinct: BTreeSet<&str> = requested.iter().map(String::as_str).collect();

    let mut outcome = ClassificationOutcome::default();

    for &id in &distinct {
        if index.marker_count(id) == 0 {
            push(&mut outcome, id, DiscrepancyKind::Unassociated);
        }
    }

    for &id in &distinct {
        if index.marker_count(id) > 1 {
            push(&mut outcome, id, DiscrepancyKind::MultipleMarkers);
        }
    }

    for &id in &distinct {
        if let Some(marker) = index.sole_marker(id) {
            if index.is_shared_marker(marker) {
                push(&mut outcome, id, DiscrepancyKind::SharedMarker);
            }
        }
    }

    outcome
}

fn push(outcome: &mut ClassificationOutcome, accession: &str, kind: DiscrepancyKind) {
    outcome.discrepancies.push(DiscrepancyRecord {
        accession: accession.to_string(),
        kind,
    });
    outcome.excluded.insert(accession.to_string());
}
