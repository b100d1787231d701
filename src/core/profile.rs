//! Student selection validated at the boundary before scoring

use super::catalog::{Catalog, CategoryKind};
use super::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of interests or strengths a student may select
pub const MAX_SELECTIONS: usize = 5;
/// Lowest accepted strength weight
pub const MIN_STRENGTH_WEIGHT: u32 = 1;
/// Highest accepted strength weight
pub const MAX_STRENGTH_WEIGHT: u32 = 5;
/// Strength weight used when the student does not choose one
pub const DEFAULT_STRENGTH_WEIGHT: u32 = 2;

/// A student's selected interests, strengths and strength weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Selected interest labels
    pub interests: Vec<String>,
    /// Selected strength labels
    pub strengths: Vec<String>,
    /// How many points each strength is worth (interests are worth 1)
    pub strength_weight: u32,
}

impl StudentProfile {
    /// Create a profile
    ///
    /// Each side is a set: repeated labels are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(interests: Vec<String>, strengths: Vec<String>, strength_weight: u32) -> Self {
        Self {
            interests: dedup_labels(interests),
            strengths: dedup_labels(strengths),
            strength_weight,
        }
    }

    /// Check the selection limits
    ///
    /// At least one interest and one strength, at most [`MAX_SELECTIONS`] of each,
    /// no label listed twice on one side, and a weight within [`MIN_STRENGTH_WEIGHT`]..=[`MAX_STRENGTH_WEIGHT`].
    /// Labels unknown to the catalog are not rejected here; the scorer ignores them.
    ///
    /// # Errors
    /// Returns a `Validation` error describing the first violated limit
    pub fn validate(&self) -> Result<()> {
        if self.interests.is_empty() || self.strengths.is_empty() {
            return Err(AdvisorError::validation(
                "select at least one interest and one strength",
            ));
        }
        if self.interests.len() > MAX_SELECTIONS {
            return Err(AdvisorError::validation(format!(
                "at most {MAX_SELECTIONS} interests may be selected ({} given)",
                self.interests.len()
            )));
        }
        if self.strengths.len() > MAX_SELECTIONS {
            return Err(AdvisorError::validation(format!(
                "at most {MAX_SELECTIONS} strengths may be selected ({} given)",
                self.strengths.len()
            )));
        }
        if let Some(label) = first_repeated(&self.interests) {
            return Err(AdvisorError::validation(format!(
                "interest '{label}' is selected more than once"
            )));
        }
        if let Some(label) = first_repeated(&self.strengths) {
            return Err(AdvisorError::validation(format!(
                "strength '{label}' is selected more than once"
            )));
        }
        if !(MIN_STRENGTH_WEIGHT..=MAX_STRENGTH_WEIGHT).contains(&self.strength_weight) {
            return Err(AdvisorError::validation(format!(
                "strength weight must be between {MIN_STRENGTH_WEIGHT} and {MAX_STRENGTH_WEIGHT} ({} given)",
                self.strength_weight
            )));
        }
        Ok(())
    }

    /// Labels the catalog does not know, tagged with their kind
    #[must_use]
    pub fn unknown_labels<'a>(&'a self, catalog: &Catalog) -> Vec<(CategoryKind, &'a str)> {
        let interests = self
            .interests
            .iter()
            .filter(|label| catalog.interest(label).is_none())
            .map(|label| (CategoryKind::Interest, label.as_str()));
        let strengths = self
            .strengths
            .iter()
            .filter(|label| catalog.strength(label).is_none())
            .map(|label| (CategoryKind::Strength, label.as_str()));
        interests.chain(strengths).collect()
    }
}

fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !unique.contains(&label) {
            unique.push(label);
        }
    }
    unique
}

fn first_repeated(labels: &[String]) -> Option<&str> {
    labels
        .iter()
        .enumerate()
        .find(|(idx, label)| labels[..*idx].contains(label))
        .map(|(_, label)| label.as_str())
}
