//! Keep/drop split of the ranked subjects

use super::scorer::SubjectScore;
use serde::Serialize;

/// Number of subjects carried into Terminale
pub const KEEP_COUNT: usize = 2;

/// Recommended track: subjects to keep for Terminale and the one to drop after Première
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Up to [`KEEP_COUNT`] subjects, best first
    pub keep: Vec<String>,
    /// Third-ranked subject, when one exists
    pub drop: Option<String>,
}

impl Track {
    /// Whether no subject was recommended at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }
}

/// Split a ranking into the keep pair and the optional drop candidate
///
/// Only the first three entries are considered. With fewer than three ranked
/// subjects `keep` may be short and `drop` is `None`.
#[must_use]
pub fn select_track(ranked: &[SubjectScore]) -> Track {
    let keep = ranked
        .iter()
        .take(KEEP_COUNT)
        .map(|s| s.subject.clone())
        .collect();
    let drop = ranked.get(KEEP_COUNT).map(|s| s.subject.clone());
    Track { keep, drop }
}
