//! Batch entry point for the GEO cross-reference load.
//!
//! Takes the run manifest path as the first argument, falling back to the
//! `GEOXREF_CONFIG` environment variable. Exits nonzero on any fatal
//! error; discrepancies are not errors and go to the report file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use geoxref_core::config::{LoadConfig, CONFIG_ENV};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = config_path()?;
    let config = LoadConfig::load(&config_path)
        .with_context(|| format!("cannot load run manifest {}", config_path.display()))?;

    geoxref_loader::run(&config, Utc::now())?;
    Ok(())
}

fn config_path() -> Result<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(PathBuf::from(arg));
    }
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Ok(PathBuf::from(path)),
        Err(_) => bail!("pass the run manifest path as an argument or set {CONFIG_ENV}"),
    }
}
