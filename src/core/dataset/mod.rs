//! Program dataset loaded once from CSV and shared read-only afterwards

pub mod subject_list;

pub use subject_list::{format_subject_list, parse_subject_list};

use super::catalog::Catalog;
use super::error::{AdvisorError, Result};
use super::filter::filter_programs;
use super::models::Program;
use crate::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

/// Accepted header names per column, canonical name first
const NAME_COLUMNS: &[&str] = &["formation", "name"];
const SUBJECT_COLUMNS: &[&str] = &["specialites_list", "required_subjects"];
const APPLICANT_COLUMNS: &[&str] = &["nb_candidats_voeu", "applicants"];
const ADMITTED_COLUMNS: &[&str] = &["nb_candidats_admis", "admitted"];

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct ProgramRow {
    #[serde(rename = "formation", alias = "name")]
    name: String,
    #[serde(rename = "specialites_list", alias = "required_subjects")]
    subjects: String,
    #[serde(rename = "nb_candidats_voeu", alias = "applicants")]
    applicants: String,
    #[serde(rename = "nb_candidats_admis", alias = "admitted")]
    admitted: String,
}

impl ProgramRow {
    fn into_program(self) -> std::result::Result<Program, String> {
        if self.name.is_empty() {
            return Err("empty formation name".to_string());
        }
        let subjects = parse_subject_list(&self.subjects)?;
        let applicants = parse_count(&self.applicants)
            .ok_or_else(|| format!("invalid applicant count '{}'", self.applicants))?;
        let admitted = parse_count(&self.admitted)
            .ok_or_else(|| format!("invalid admitted count '{}'", self.admitted))?;
        Ok(Program::new(self.name, subjects, applicants, admitted))
    }
}

/// Parse a non-negative integer count, accepting integral floats such as `"120.0"`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// In-memory table of programs
#[derive(Debug, Clone, Default)]
pub struct ProgramTable {
    programs: Vec<Program>,
    skipped_rows: usize,
}

impl ProgramTable {
    /// Wrap already-built programs
    #[must_use]
    pub const fn from_programs(programs: Vec<Program>) -> Self {
        Self {
            programs,
            skipped_rows: 0,
        }
    }

    /// Load the dataset from a CSV file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the CSV is unusable
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AdvisorError::dataset(format!("cannot open {}: {e}", path.display()))
        })?;
        let table = Self::from_reader(file)?;
        info!(
            "Loaded {} programs from {} ({} rows skipped)",
            table.len(),
            path.display(),
            table.skipped_rows
        );
        Ok(table)
    }

    /// Load the dataset from any CSV source
    ///
    /// Rows that fail to parse are skipped with a warning. A missing required
    /// column or an I/O failure aborts the load.
    ///
    /// # Errors
    /// Returns `Dataset` when a required column is missing and `Csv` on read failures
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        check_headers(rdr.headers()?)?;

        let mut programs = Vec::new();
        let mut skipped_rows = 0;
        for (idx, record) in rdr.deserialize::<ProgramRow>().enumerate() {
            // header is line 1
            let line = idx + 2;
            let row = match record {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping dataset line {line}: {e}");
                    skipped_rows += 1;
                    continue;
                }
            };
            match row.into_program() {
                Ok(program) => programs.push(program),
                Err(e) => {
                    warn!("Skipping dataset line {line}: {e}");
                    skipped_rows += 1;
                }
            }
        }

        debug!("Parsed {} programs, skipped {skipped_rows}", programs.len());
        Ok(Self {
            programs,
            skipped_rows,
        })
    }

    /// All programs in dataset order
    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Number of programs loaded
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether no program was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Number of rows dropped while loading
    #[must_use]
    pub const fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Programs requiring every subject in `keep`, most applicants first
    #[must_use]
    pub fn matching<S: AsRef<str>>(&self, keep: &[S]) -> Vec<&Program> {
        filter_programs(&self.programs, keep)
    }

    /// Required subjects that are not canonical in `catalog`, sorted
    #[must_use]
    pub fn unknown_subjects(&self, catalog: &Catalog) -> BTreeSet<String> {
        self.programs
            .iter()
            .flat_map(|p| p.required_subjects.iter())
            .filter(|s| !catalog.is_valid_subject(s))
            .cloned()
            .collect()
    }
}

/// Each required column must appear exactly once, under one of its accepted names
fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    for accepted in [NAME_COLUMNS, SUBJECT_COLUMNS, APPLICANT_COLUMNS, ADMITTED_COLUMNS] {
        let found: Vec<&str> = headers.iter().filter(|h| accepted.contains(h)).collect();
        match found.as_slice() {
            [] => {
                return Err(AdvisorError::dataset(format!(
                    "missing column '{}'",
                    accepted[0]
                )));
            }
            [_] => {}
            _ => {
                return Err(AdvisorError::dataset(format!(
                    "column '{}' given more than once ({})",
                    accepted[0],
                    found.join(", ")
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "formation,specialites_list,nb_candidats_voeu,nb_candidats_admis\n";

    #[test]
    fn test_loads_rows() {
        let data = format!(
            "{HEADER}BUT - Informatique,\"['Mathématiques', 'Numérique et Sciences Informatiques']\",1000,100\n\
             Licence - Arts plastiques,['Arts'],500,250\n"
        );
        let table = ProgramTable::from_reader(data.as_bytes()).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows(), 0);
        let first = &table.programs()[0];
        assert_eq!(first.name, "BUT - Informatique");
        assert_eq!(
            first.required_subjects,
            ["Mathématiques", "Numérique et Sciences Informatiques"]
        );
        assert_eq!(first.applicants, 1000);
        assert_eq!(first.admitted, 100);
    }

    #[test]
    fn test_skips_malformed_rows() {
        let data = format!(
            "{HEADER}Good,['Arts'],10,1\n\
             Bad count,['Arts'],lots,1\n\
             Bad list,\"['Arts\",10,1\n\
             Short row,['Arts']\n\
             Also good,['Arts'],20.0,2\n"
        );
        let table = ProgramTable::from_reader(data.as_bytes()).expect("load");
        let names: Vec<_> = table.programs().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Good", "Also good"]);
        assert_eq!(table.skipped_rows(), 3);
        assert_eq!(table.programs()[1].applicants, 20);
    }

    #[test]
    fn test_accepts_english_headers_and_extra_columns() {
        let data = "region,name,required_subjects,applicants,admitted\n\
                    IDF,Licence - Droit,Sciences économiques et sociales,300,30\n";
        let table = ProgramTable::from_reader(data.as_bytes()).expect("load");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.programs()[0].required_subjects,
            ["Sciences économiques et sociales"]
        );
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let data = "formation,specialites_list,nb_candidats_voeu\nX,['Arts'],1\n";
        let err = ProgramTable::from_reader(data.as_bytes()).expect_err("missing column");
        assert!(err.to_string().contains("nb_candidats_admis"));
    }

    #[test]
    fn test_header_and_alias_together_is_an_error() {
        let data = "formation,name,specialites_list,nb_candidats_voeu,nb_candidats_admis
                    BUT - Informatique,BUT Info,['Mathématiques'],10,1
";
        let err = ProgramTable::from_reader(data.as_bytes()).expect_err("ambiguous column");
        assert!(matches!(err, AdvisorError::Dataset { .. }));
        assert!(err.to_string().contains("formation, name"), "{err}");
    }

    #[test]
    fn test_repeated_header_is_an_error() {
        let data = "formation,specialites_list,nb_candidats_voeu,nb_candidats_voeu,nb_candidats_admis
";
        assert!(ProgramTable::from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count(" 42.0 "), Some(42));
        assert_eq!(parse_count("4.5"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_unknown_subjects() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let table = ProgramTable::from_programs(vec![
            Program::new("A".into(), vec!["Arts".into(), "Latin".into()], 1, 1),
            Program::new("B".into(), vec!["Cinéma".into()], 1, 1),
        ]);
        let unknown: Vec<_> = table.unknown_subjects(&catalog).into_iter().collect();
        assert_eq!(unknown, ["Cinéma", "Latin"]);
    }
}
