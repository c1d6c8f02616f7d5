//! Accession identifier codec.
//!
//! An accession ID is a leading (possibly empty) prefix followed by a
//! trailing run of digits. Cross-reference rows store both halves, so the
//! split has to be stable: re-splitting an emitted row's ID must reproduce
//! the stored parts exactly.

use serde::{Deserialize, Serialize};

use crate::errors::{XrefError, XrefResult};

/// The two halves of an accession ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessionParts {
    /// Literal leading substring before the trailing digit run. Empty for
    /// EntrezGene IDs, which are purely numeric.
    pub prefix: String,
    /// Trailing digit run parsed as an integer (leading zeros stripped).
    pub numeric: u64,
}

impl AccessionParts {
    /// Reassemble an accession ID from the stored halves.
    ///
    /// Leading zeros of the original numeric part are not restored; the
    /// result still re-splits to the same parts.
    pub fn to_accession(&self) -> String {
        format!("{}{}", self.prefix, self.numeric)
    }
}

/// Split an accession ID into its prefix and numeric suffix.
///
/// Fails with [`XrefError::MalformedIdentifier`] when the ID has no
/// trailing digit run (including the empty string).
pub fn split(accession: &str) -> XrefResult<AccessionParts> {
    let digits = accession
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(XrefError::MalformedIdentifier {
            accession: accession.to_string(),
        });
    }

    // ASCII digits are one byte each, so this is a char boundary.
    let boundary = accession.len() - digits;
    let numeric: u64 =
        accession[boundary..]
            .parse()
            .map_err(|_| XrefError::MalformedIdentifier {
                accession: accession.to_string(),
            })?;

    Ok(AccessionParts {
        prefix: accession[..boundary].to_string(),
        numeric,
    })
}
