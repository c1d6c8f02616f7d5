//! Error taxonomy for the cross-reference load.
//!
//! Precondition and invariant failures abort the whole run; discrepancies
//! are not errors and never reach this enum (see geoxref-reconcile).

/// Convenience alias used across the workspace.
pub type XrefResult<T> = Result<T, XrefError>;

#[derive(Debug, thiserror::Error)]
pub enum XrefError {
    /// An accession ID with no trailing numeric suffix reached generation.
    /// Intake validation upstream should have rejected it.
    #[error("malformed accession ID {accession:?}: no numeric suffix")]
    MalformedIdentifier { accession: String },

    /// A required run key did not resolve to a positive value.
    #[error("cannot determine the {name} key (got {value})")]
    BadRunKey { name: &'static str, value: i64 },

    /// An accession ID escaped the exclusion set without holding exactly
    /// one marker association. The classifier and generator read the same
    /// index snapshot, so this means a logic bug, not bad data.
    #[error("accession ID {accession:?} escaped exclusion with {marker_count} associated markers")]
    AssociationInvariant {
        accession: String,
        marker_count: usize,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
