//! CLI command handlers for `specadvisor`.
//!
//! Each command is implemented in its own submodule. Handlers print results to
//! stdout, report failures as `✗` lines on stderr and return whether they succeeded.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod recommend;

use specialites_advisor::config::Config;
use specialites_advisor::core::{Advisor, Catalog, ProgramTable, Result};
use specialites_advisor::{debug, warn};
use std::path::Path;

/// Load the configured catalog, or the built-in one when `paths.catalog` is empty
///
/// # Errors
/// Returns an error if the catalog file cannot be read, parsed or validated
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    if config.paths.catalog.is_empty() {
        debug!("Using built-in catalog");
        Catalog::builtin()
    } else {
        debug!("Loading catalog from {}", config.paths.catalog);
        Catalog::from_path(&config.paths.catalog)
    }
}

/// Load the configured dataset
///
/// # Errors
/// Returns an error if the dataset cannot be read or lacks a required column
pub fn load_programs(config: &Config) -> Result<ProgramTable> {
    let path = Path::new(&config.paths.dataset);
    debug!("Loading dataset from {}", path.display());
    let table = ProgramTable::from_path(path)?;
    if table.skipped_rows() > 0 {
        warn!(
            "{} malformed rows skipped in {}",
            table.skipped_rows(),
            path.display()
        );
    }
    Ok(table)
}

/// Load catalog and dataset together
///
/// # Errors
/// Returns the first loading error
pub fn load_advisor(config: &Config) -> Result<Advisor> {
    let catalog = load_catalog(config)?;
    let programs = load_programs(config)?;
    let unknown = programs.unknown_subjects(&catalog);
    if !unknown.is_empty() {
        warn!(
            "Dataset uses subjects missing from the catalog: {}",
            unknown.into_iter().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(Advisor::new(catalog, programs))
}
