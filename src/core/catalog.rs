//! Subject catalog: canonical spécialités and the interest/strength mappings
//!
//! The catalog is versioned configuration data. The default one is compiled in from
//! `assets/catalog.toml`; a replacement file with the same schema can be loaded at
//! startup. Either way it is validated once and never mutated afterwards.

use super::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Built-in catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Which of the two mappings a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Things the student likes
    Interest,
    /// School subjects the student is good at
    Strength,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interest => write!(f, "interest"),
            Self::Strength => write!(f, "strength"),
        }
    }
}

/// One selectable label and the subjects it votes for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// Label shown to the student (e.g. "Computer science")
    pub label: String,
    /// Subjects credited when the label is selected, in declaration order
    pub subjects: Vec<String>,
}

/// Canonical subjects plus the interest and strength mappings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Version string of the mapping data
    pub version: String,
    /// The canonical spécialités
    pub subjects: Vec<String>,
    /// Interest label mappings
    #[serde(default)]
    pub interests: Vec<CategoryMapping>,
    /// Strength label mappings
    #[serde(default)]
    pub strengths: Vec<CategoryMapping>,
}

impl Catalog {
    /// Load the compiled-in catalog
    ///
    /// # Errors
    /// Returns an error if the embedded catalog fails to parse or validate
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from a TOML string
    ///
    /// # Errors
    /// Returns `CatalogParse` for malformed TOML and `InvalidCatalog` when a
    /// mapping references a subject outside the canonical list
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(toml_str)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check the catalog invariants
    ///
    /// Every mapped subject must be canonical, labels must be unique and non-empty
    /// within their mapping, and no mapping may be empty. All violations are
    /// collected into a single error.
    ///
    /// # Errors
    /// Returns `InvalidCatalog` listing every violation
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let mut canonical = HashSet::new();
        for subject in &self.subjects {
            if subject.trim().is_empty() {
                problems.push("empty subject name in canonical list".to_string());
            } else if !canonical.insert(subject.as_str()) {
                problems.push(format!("duplicate canonical subject '{subject}'"));
            }
        }

        for (kind, mappings) in [
            (CategoryKind::Interest, &self.interests),
            (CategoryKind::Strength, &self.strengths),
        ] {
            let mut labels = HashSet::new();
            for mapping in mappings {
                if mapping.label.trim().is_empty() {
                    problems.push(format!("{kind} with an empty label"));
                } else if !labels.insert(mapping.label.as_str()) {
                    problems.push(format!("duplicate {kind} label '{}'", mapping.label));
                }
                if mapping.subjects.is_empty() {
                    problems.push(format!("{kind} '{}' maps to no subject", mapping.label));
                }
                for subject in &mapping.subjects {
                    if !canonical.contains(subject.as_str()) {
                        problems.push(format!(
                            "{kind} '{}' maps to unknown subject '{subject}'",
                            mapping.label
                        ));
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AdvisorError::InvalidCatalog {
                message: problems.join("; "),
            })
        }
    }

    /// Subjects credited by an interest label, if the label exists
    #[must_use]
    pub fn interest(&self, label: &str) -> Option<&[String]> {
        Self::lookup(&self.interests, label)
    }

    /// Subjects credited by a strength label, if the label exists
    #[must_use]
    pub fn strength(&self, label: &str) -> Option<&[String]> {
        Self::lookup(&self.strengths, label)
    }

    /// Subjects credited by a label of the given kind
    #[must_use]
    pub fn subjects_for(&self, kind: CategoryKind, label: &str) -> Option<&[String]> {
        match kind {
            CategoryKind::Interest => self.interest(label),
            CategoryKind::Strength => self.strength(label),
        }
    }

    /// All labels of one kind, in declaration order
    #[must_use]
    pub fn labels(&self, kind: CategoryKind) -> Vec<&str> {
        let mappings = match kind {
            CategoryKind::Interest => &self.interests,
            CategoryKind::Strength => &self.strengths,
        };
        mappings.iter().map(|m| m.label.as_str()).collect()
    }

    /// Whether `subject` is one of the canonical spécialités
    #[must_use]
    pub fn is_valid_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    fn lookup<'a>(mappings: &'a [CategoryMapping], label: &str) -> Option<&'a [String]> {
        mappings
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.subjects.as_slice())
    }
}
