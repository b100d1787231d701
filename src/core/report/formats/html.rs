//! HTML report generator
//!
//! Renders `templates/report.html` with askama. The page is self-contained with
//! embedded CSS; all values are HTML-escaped by the template engine.

use crate::core::dataset::format_subject_list;
use crate::core::error::Result;
use crate::core::report::{format_rate, ReportContext, ReportGenerator};
use crate::core::scorer::SubjectScore;
use askama::Template;

/// One formation row as displayed in the report
struct FormationRow {
    name: String,
    subjects: String,
    applicants: u32,
    rate: String,
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    catalog_version: &'a str,
    interests: &'a [String],
    strengths: &'a [String],
    strength_weight: u32,
    scores: &'a [SubjectScore],
    keep: String,
    drop: &'a str,
    has_drop: bool,
    rows: Vec<FormationRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn template<'a>(ctx: &ReportContext<'a>) -> HtmlReportTemplate<'a> {
        let rows = ctx
            .recommendation
            .programs
            .iter()
            .map(|p| FormationRow {
                name: p.name.clone(),
                subjects: format_subject_list(&p.required_subjects),
                applicants: p.applicants,
                rate: format_rate(p.admission_rate()),
            })
            .collect();

        HtmlReportTemplate {
            catalog_version: ctx.catalog_version,
            interests: &ctx.profile.interests,
            strengths: &ctx.profile.strengths,
            strength_weight: ctx.profile.strength_weight,
            scores: &ctx.recommendation.scores,
            keep: ctx.keep_label(),
            drop: ctx.recommendation.track.drop.as_deref().unwrap_or(""),
            has_drop: ctx.recommendation.track.drop.is_some(),
            rows,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(Self::template(ctx).render()?)
    }
}
