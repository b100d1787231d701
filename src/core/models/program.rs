//! Program (formation) model

use serde::{Deserialize, Serialize};

/// A university program with its admission statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Formation name (e.g., "BUT - Informatique")
    pub name: String,

    /// Spécialités required by the program, in dataset order, without duplicates
    pub required_subjects: Vec<String>,

    /// Number of applicants who listed the program
    pub applicants: u32,

    /// Number of applicants admitted
    pub admitted: u32,
}

impl Program {
    /// Create a new program
    ///
    /// Duplicate subjects are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(name: String, required_subjects: Vec<String>, applicants: u32, admitted: u32) -> Self {
        let mut subjects: Vec<String> = Vec::with_capacity(required_subjects.len());
        for subject in required_subjects {
            if !subjects.contains(&subject) {
                subjects.push(subject);
            }
        }
        Self {
            name,
            required_subjects: subjects,
            applicants,
            admitted,
        }
    }

    /// Whether the program requires `subject`
    #[must_use]
    pub fn requires(&self, subject: &str) -> bool {
        self.required_subjects.iter().any(|s| s == subject)
    }

    /// Whether the program requires every subject in `subjects`
    ///
    /// An empty `subjects` slice is satisfied by every program.
    #[must_use]
    pub fn requires_all<S: AsRef<str>>(&self, subjects: &[S]) -> bool {
        subjects.iter().all(|s| self.requires(s.as_ref()))
    }

    /// Admitted / applicants, or `None` when nobody applied
    #[must_use]
    pub fn admission_rate(&self) -> Option<f64> {
        if self.applicants == 0 {
            None
        } else {
            Some(f64::from(self.admitted) / f64::from(self.applicants))
        }
    }
}
