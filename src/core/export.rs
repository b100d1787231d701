//! Export matching programs as delimited text

use super::dataset::format_subject_list;
use super::error::Result;
use super::models::Program;
use crate::debug;
use std::fs::File;
use std::io;
use std::path::Path;

/// File name used when no output path is given
pub const DEFAULT_EXPORT_FILE: &str = "formations_recommendation.csv";

/// Column header of exported tables
pub const EXPORT_HEADER: [&str; 4] = [
    "formation",
    "specialites_list",
    "nb_candidats_voeu",
    "taux_admission",
];

/// Trait for writing a filtered program table somewhere
pub trait ResultExporter {
    /// Export `programs` to `output_path`, returning the number of rows written
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, programs: &[Program], output_path: &Path) -> Result<usize>;
}

/// CSV exporter for program tables
pub struct CsvExporter;

impl ResultExporter for CsvExporter {
    fn export(&self, programs: &[Program], output_path: &Path) -> Result<usize> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(output_path)?;
        export_programs_csv(programs, file)
    }
}

/// Write programs as CSV to any writer
///
/// The admission rate is written at full precision, or left empty when the
/// program had no applicants.
///
/// # Errors
/// Returns an error if writing fails
pub fn export_programs_csv<W: io::Write>(programs: &[Program], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;

    for program in programs {
        debug!("Exporting program {}", program.name);
        let rate = program
            .admission_rate()
            .map_or_else(String::new, |r| r.to_string());
        wtr.write_record([
            program.name.as_str(),
            format_subject_list(&program.required_subjects).as_str(),
            program.applicants.to_string().as_str(),
            rate.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(programs.len())
}
