//! Filter command handler

use super::load_programs;
use specialites_advisor::config::Config;
use specialites_advisor::core::export::{CsvExporter, ResultExporter};
use specialites_advisor::core::report::format_rate;
use specialites_advisor::core::Program;
use specialites_advisor::{error, info};
use std::path::Path;

/// Run the filter command.
///
/// An empty `keep` list matches every formation.
pub fn run(keep: &[String], output: Option<&Path>, config: &Config) -> bool {
    let table = match load_programs(config) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to load dataset {}: {e}", config.paths.dataset);
            eprintln!("✗ Failed to load dataset {}: {e}", config.paths.dataset);
            return false;
        }
    };

    let matches: Vec<Program> = table.matching(keep).into_iter().cloned().collect();
    info!(
        "{} of {} formations require [{}]",
        matches.len(),
        table.len(),
        keep.join(", ")
    );

    if matches.is_empty() {
        println!("No matching university formations found for this combination.");
        return true;
    }

    for program in &matches {
        println!(
            "{:<60} {:>7} applicants  {:>6}",
            program.name,
            program.applicants,
            format_rate(program.admission_rate())
        );
    }

    let Some(output) = output else {
        return true;
    };
    match CsvExporter.export(&matches, output) {
        Ok(rows) => {
            println!("✓ {rows} formations exported to: {}", output.display());
            true
        }
        Err(e) => {
            error!("Export to {} failed: {e}", output.display());
            eprintln!("✗ Failed to export formations to {}: {e}", output.display());
            false
        }
    }
}
