//! Report generation for recommendations
//!
//! Renders a student's profile, subject scores, keep/drop track and matching
//! formations as Markdown or HTML.

pub mod formats;

use crate::core::advisor::Recommendation;
use crate::core::error::Result;
use crate::core::profile::StudentProfile;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Text shown instead of an admission rate when nobody applied
pub const UNDEFINED_RATE: &str = "n/a";

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Selection the recommendation was computed from
    pub profile: &'a StudentProfile,
    /// Scores, track and matching programs
    pub recommendation: &'a Recommendation,
    /// Version of the catalog used for scoring
    pub catalog_version: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        profile: &'a StudentProfile,
        recommendation: &'a Recommendation,
        catalog_version: &'a str,
    ) -> Self {
        Self {
            profile,
            recommendation,
            catalog_version,
        }
    }

    /// Kept subjects joined for display
    #[must_use]
    pub fn keep_label(&self) -> String {
        if self.recommendation.track.keep.is_empty() {
            "-".to_string()
        } else {
            self.recommendation.track.keep.join(", ")
        }
    }

    /// Subject to drop, if any
    #[must_use]
    pub fn drop_label(&self) -> Option<&str> {
        self.recommendation.track.drop.as_deref()
    }
}

/// Format an admission rate as a percentage, or [`UNDEFINED_RATE`]
#[must_use]
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| UNDEFINED_RATE.to_string(), |r| format!("{:.1}%", r * 100.0))
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rates() {
        assert_eq!(format_rate(Some(0.25)), "25.0%");
        assert_eq!(format_rate(Some(0.071_54)), "7.2%");
        assert_eq!(format_rate(None), UNDEFINED_RATE);
    }
}
