//! Run configuration for the batch load.
//!
//! The loader reads a TOML run manifest naming the collaborator files and
//! the run keys the association source resolved from the target store.
//! Missing or unresolvable keys stop the load before anything is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{XrefError, XrefResult};

/// Environment variable naming the run manifest file.
pub const CONFIG_ENV: &str = "GEOXREF_CONFIG";

/// Integer keys resolved by the association-source collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunKeys {
    /// Next free accession key (max existing key + 1).
    pub next_accession_key: i64,
    /// Logical db the new cross-references are filed under (GEO).
    pub geo_logical_db_key: i64,
    /// MGI type key for marker records.
    pub marker_type_key: i64,
    /// Audit actor for the created-by/modified-by columns.
    pub created_by_key: i64,
}

impl RunKeys {
    /// Every key must resolve to a positive value before the run starts.
    pub fn validate(&self) -> XrefResult<()> {
        for (name, value) in [
            ("next accession", self.next_accession_key),
            ("GEO logical db", self.geo_logical_db_key),
            ("marker MGI type", self.marker_type_key),
            ("created-by user", self.created_by_key),
        ] {
            if value <= 0 {
                return Err(XrefError::BadRunKey { name, value });
            }
        }
        Ok(())
    }
}

/// The full run manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// EntrezGene ID list, one per line (the fetcher's output).
    pub input_file: PathBuf,
    /// Tab-delimited accession/marker snapshot from the target store,
    /// already scoped to the EntrezGene logical db and the marker type.
    pub association_file: PathBuf,
    /// Discrepancy report destination.
    pub report_file: PathBuf,
    /// BCP file destination for the new ACC_Accession rows.
    pub bcp_file: PathBuf,
    pub keys: RunKeys,
}

impl LoadConfig {
    /// Parse a manifest and validate its run keys.
    pub fn from_toml_str(raw: &str) -> XrefResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| XrefError::Config {
            message: e.to_string(),
        })?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Load a manifest from disk.
    pub fn load(path: &Path) -> XrefResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
