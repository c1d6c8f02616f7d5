//! # geoxref-reconcile
//!
//! Reconciliation engine for the GEO cross-reference load: classifies the
//! requested EntrezGene IDs against the existing association snapshot and
//! generates new ACC_Accession rows for the unambiguous ones. Ambiguous
//! IDs land on the discrepancy report instead.

pub mod bcp;
pub mod classify;
pub mod engine;
pub mod generate;
pub mod report;

pub use classify::{ClassificationOutcome, DiscrepancyKind, DiscrepancyRecord};
pub use engine::{ReconcileEngine, RunOutcome, RunSummary};
pub use generate::{CrossReferenceRecord, RunMetadata};
