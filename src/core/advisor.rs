//! Recommendation pipeline: validate, score, select the track, filter programs

use super::catalog::Catalog;
use super::dataset::ProgramTable;
use super::error::Result;
use super::models::Program;
use super::profile::StudentProfile;
use super::scorer::{self, SubjectScore};
use super::selection::{select_track, Track};
use crate::info;

/// Outcome of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Top-ranked subjects with their scores
    pub scores: Vec<SubjectScore>,
    /// Keep/drop split of `scores`
    pub track: Track,
    /// Programs requiring every kept subject, most applicants first
    pub programs: Vec<Program>,
}

impl Recommendation {
    /// Whether any program matched the kept subjects
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.programs.is_empty()
    }
}

/// Holds the catalog and dataset loaded at startup and answers requests against them
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: Catalog,
    programs: ProgramTable,
}

impl Advisor {
    /// Create an advisor over a validated catalog and a loaded dataset
    #[must_use]
    pub const fn new(catalog: Catalog, programs: ProgramTable) -> Self {
        Self { catalog, programs }
    }

    /// The catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The program dataset in use
    #[must_use]
    pub const fn programs(&self) -> &ProgramTable {
        &self.programs
    }

    /// Recommend a track and the programs matching it
    ///
    /// # Errors
    /// Returns a `Validation` error when the profile breaks the selection limits;
    /// scoring and filtering are not run in that case
    pub fn recommend(&self, profile: &StudentProfile) -> Result<Recommendation> {
        profile.validate()?;

        let scores = scorer::score(
            &self.catalog,
            profile.interests.as_slice(),
            profile.strengths.as_slice(),
            profile.strength_weight,
        );
        let track = select_track(&scores);
        // an empty keep set would match the whole dataset
        let programs: Vec<Program> = if track.is_empty() {
            Vec::new()
        } else {
            self.programs
                .matching(track.keep.as_slice())
                .into_iter()
                .cloned()
                .collect()
        };

        info!(
            "Recommended keep=[{}] drop={} with {} matching programs",
            track.keep.join(", "),
            track.drop.as_deref().unwrap_or("-"),
            programs.len()
        );

        Ok(Recommendation {
            scores,
            track,
            programs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AdvisorError;

    fn advisor() -> Advisor {
        let programs = ProgramTable::from_programs(vec![
            Program::new(
                "Licence - Informatique".into(),
                vec!["Numérique et Sciences Informatiques".into(), "Mathématiques".into()],
                2000,
                400,
            ),
            Program::new("Licence - Arts".into(), vec!["Arts".into()], 800, 200),
            Program::new(
                "CPGE - MPI".into(),
                vec![
                    "Mathématiques".into(),
                    "Numérique et Sciences Informatiques".into(),
                    "Physique-Chimie".into(),
                ],
                3000,
                300,
            ),
        ]);
        Advisor::new(Catalog::builtin().expect("builtin catalog"), programs)
    }

    #[test]
    fn recommends_track_and_programs() {
        let profile = StudentProfile::new(
            vec!["Computer science".into()],
            vec!["Mathématiques".into()],
            2,
        );
        let rec = advisor().recommend(&profile).expect("recommendation");
        assert_eq!(
            rec.track.keep,
            ["Numérique et Sciences Informatiques", "Mathématiques"]
        );
        assert_eq!(rec.track.drop.as_deref(), Some("Physique-Chimie"));
        let names: Vec<_> = rec.programs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["CPGE - MPI", "Licence - Informatique"]);
        assert!(rec.has_matches());
    }

    #[test]
    fn no_matching_program_is_not_an_error() {
        let profile = StudentProfile::new(
            vec!["Law & politics".into()],
            vec!["Histoire-Géographie".into()],
            3,
        );
        let rec = advisor().recommend(&profile).expect("recommendation");
        assert_eq!(rec.track.keep.len(), 2);
        assert!(!rec.has_matches());
    }

    #[test]
    fn only_unknown_labels_yield_no_programs() {
        let profile = StudentProfile::new(vec!["Knitting".into()], vec!["Cooking".into()], 2);
        let rec = advisor().recommend(&profile).expect("recommendation");
        assert!(rec.track.is_empty());
        assert!(!rec.has_matches());
    }

    #[test]
    fn repeated_interest_votes_once() {
        let profile = StudentProfile::new(
            vec!["Music".into(), "Music".into(), "Music".into()],
            vec!["Mathématiques".into()],
            1,
        );
        let rec = advisor().recommend(&profile).expect("recommendation");
        assert_eq!(rec.scores[0].score, 1);
        assert_eq!(rec.track.keep, ["Arts", "Mathématiques"]);
        assert!(rec.scores.iter().all(|s| s.score == 1));
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let profile = StudentProfile::new(Vec::new(), Vec::new(), 2);
        let err = advisor().recommend(&profile).expect_err("empty profile");
        assert!(matches!(err, AdvisorError::Validation { .. }));
    }
}
