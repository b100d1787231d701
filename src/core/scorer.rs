//! Weighted subject tally over the interest and strength mappings
//!
//! Each selected interest adds 1 to every subject it maps to, each selected strength
//! adds the strength weight. Ranking is a stable sort by descending score, so
//! subjects with equal scores stay in the order they were first credited:
//! interests before strengths, each in selection order, subjects in mapping order.
//! Labels missing from the catalog contribute nothing.

use super::catalog::Catalog;
use crate::debug;
use serde::Serialize;
use std::collections::HashMap;

/// How many ranked subjects a recommendation considers
pub const TOP_SUBJECTS: usize = 3;

/// A subject and its accumulated score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectScore {
    /// Spécialité name
    pub subject: String,
    /// Total votes received
    pub score: u32,
}

/// Per-request score accumulator that remembers first-seen order
#[derive(Debug, Clone, Default)]
pub struct SubjectTally {
    entries: Vec<SubjectScore>,
    index: HashMap<String, usize>,
}

impl SubjectTally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `subject`, registering it on first sight
    ///
    /// Scores saturate at `u32::MAX`.
    pub fn add(&mut self, subject: &str, points: u32) {
        if let Some(&idx) = self.index.get(subject) {
            let entry = &mut self.entries[idx];
            entry.score = entry.score.saturating_add(points);
        } else {
            self.index.insert(subject.to_string(), self.entries.len());
            self.entries.push(SubjectScore {
                subject: subject.to_string(),
                score: points,
            });
        }
    }

    /// Current score of `subject` (0 when never credited)
    #[must_use]
    pub fn get(&self, subject: &str) -> u32 {
        self.index
            .get(subject)
            .map_or(0, |&idx| self.entries[idx].score)
    }

    /// Number of distinct subjects credited
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been credited
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every credited subject, highest score first, ties in first-seen order
    #[must_use]
    pub fn ranked(&self) -> Vec<SubjectScore> {
        let mut ranked = self.entries.clone();
        // sort_by is stable: equal scores keep insertion order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// The first `n` entries of [`ranked`](Self::ranked)
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<SubjectScore> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Build the full tally for a selection
#[must_use]
pub fn tally<S: AsRef<str>>(
    catalog: &Catalog,
    interests: &[S],
    strengths: &[S],
    strength_weight: u32,
) -> SubjectTally {
    let mut tally = SubjectTally::new();

    for label in interests.iter().map(AsRef::as_ref) {
        match catalog.interest(label) {
            Some(subjects) => subjects.iter().for_each(|s| tally.add(s, 1)),
            None => debug!("Ignoring unknown interest '{label}'"),
        }
    }
    for label in strengths.iter().map(AsRef::as_ref) {
        match catalog.strength(label) {
            Some(subjects) => subjects.iter().for_each(|s| tally.add(s, strength_weight)),
            None => debug!("Ignoring unknown strength '{label}'"),
        }
    }

    tally
}

/// Rank subjects for a selection and keep the top [`TOP_SUBJECTS`]
#[must_use]
pub fn score<S: AsRef<str>>(
    catalog: &Catalog,
    interests: &[S],
    strengths: &[S],
    strength_weight: u32,
) -> Vec<SubjectScore> {
    let ranked = tally(catalog, interests, strengths, strength_weight).top(TOP_SUBJECTS);
    debug!(
        "Top subjects: {}",
        ranked
            .iter()
            .map(|s| format!("{}={}", s.subject, s.score))
            .collect::<Vec<_>>()
            .join(", ")
    );
    ranked
}
