//! Catalog command handler

use super::{load_catalog, load_programs};
use crate::args::CatalogSubcommand;
use specialites_advisor::config::Config;
use specialites_advisor::core::{Catalog, CategoryKind};
use specialites_advisor::{error, warn};
use std::path::Path;

/// Dispatch catalog subcommands
pub fn run(subcommand: Option<CatalogSubcommand>, config: &Config) -> bool {
    if let Some(CatalogSubcommand::Check { file }) = subcommand {
        return handle_check(file.as_deref(), config);
    }

    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {e}");
            eprintln!("✗ Failed to load catalog: {e}");
            return false;
        }
    };

    match subcommand {
        None => print_summary(&catalog),
        Some(CatalogSubcommand::Interests) => print_mappings(&catalog, CategoryKind::Interest),
        Some(CatalogSubcommand::Strengths) => print_mappings(&catalog, CategoryKind::Strength),
        Some(CatalogSubcommand::Subjects) => {
            for subject in &catalog.subjects {
                println!("{subject}");
            }
        }
        Some(CatalogSubcommand::Check { .. }) => {}
    }
    true
}

fn print_summary(catalog: &Catalog) {
    println!("\n=== Catalog {} ===\n", catalog.version);
    println!("Subjects:  {}", catalog.subjects.len());
    println!("Interests: {}", catalog.interests.len());
    println!("Strengths: {}", catalog.strengths.len());
}

fn print_mappings(catalog: &Catalog, kind: CategoryKind) {
    for label in catalog.labels(kind) {
        let subjects = catalog.subjects_for(kind, label).unwrap_or_default();
        println!("{label}: {}", subjects.join(", "));
    }
}

/// Validate a catalog and report dataset subjects it does not know
fn handle_check(file: Option<&Path>, config: &Config) -> bool {
    let loaded = file.map_or_else(|| load_catalog(config), Catalog::from_path);
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Catalog check failed: {e}");
            eprintln!("✗ {e}");
            return false;
        }
    };
    println!(
        "✓ Catalog {} is valid ({} subjects, {} interests, {} strengths)",
        catalog.version,
        catalog.subjects.len(),
        catalog.interests.len(),
        catalog.strengths.len()
    );

    match load_programs(config) {
        Ok(table) => {
            let unknown = table.unknown_subjects(&catalog);
            if unknown.is_empty() {
                println!("✓ All {} dataset formations use known subjects", table.len());
            } else {
                for subject in &unknown {
                    println!("! Dataset subject not in catalog: {subject}");
                }
            }
        }
        Err(e) => warn!("Dataset not checked: {e}"),
    }
    true
}
