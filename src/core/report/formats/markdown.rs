//! Markdown report generator
//!
//! Renders well in GitHub, GitLab and most editors.

use crate::core::dataset::format_subject_list;
use crate::core::error::Result;
use crate::core::report::{format_rate, ReportContext, ReportGenerator};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{catalog_version}}", ctx.catalog_version);
        output = output.replace("{{interests}}", &escape_cell(&ctx.profile.interests.join(", ")));
        output = output.replace("{{strengths}}", &escape_cell(&ctx.profile.strengths.join(", ")));
        output = output.replace(
            "{{strength_weight}}",
            &ctx.profile.strength_weight.to_string(),
        );

        output = output.replace("{{subject_scores}}", &Self::generate_scores_table(ctx));

        output = output.replace("{{keep}}", &ctx.keep_label());
        let drop_line = ctx
            .drop_label()
            .map_or_else(String::new, |d| format!("- **To drop later:** {d}"));
        output = output.replace("{{drop_line}}", &drop_line);

        output = output.replace("{{formations}}", &Self::generate_formations_table(ctx));

        output
    }

    /// Ranked subjects with their scores
    fn generate_scores_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| # | Spécialité | Score |\n");
        table.push_str("|---|---|---|\n");
        for (idx, s) in ctx.recommendation.scores.iter().enumerate() {
            let _ = writeln!(table, "| {} | {} | {} |", idx + 1, s.subject, s.score);
        }
        table
    }

    /// Matching programs, or an informational line when there are none
    fn generate_formations_table(ctx: &ReportContext) -> String {
        if !ctx.recommendation.has_matches() {
            return "_No matching university formations found for this combination._\n"
                .to_string();
        }

        let mut table = String::new();
        table.push_str("| Formation | Spécialités | Applicants | Admission rate |\n");
        table.push_str("|---|---|---|---|\n");
        for program in &ctx.recommendation.programs {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                escape_cell(&program.name),
                escape_cell(&format_subject_list(&program.required_subjects)),
                program.applicants,
                format_rate(program.admission_rate())
            );
        }
        table
    }
}

/// Escape pipe characters so a value stays in one table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisor::Recommendation;
    use crate::core::models::Program;
    use crate::core::profile::StudentProfile;
    use crate::core::scorer::SubjectScore;
    use crate::core::selection::Track;

    fn profile() -> StudentProfile {
        StudentProfile::new(vec!["Music".into()], vec!["Français".into()], 2)
    }

    fn recommendation(programs: Vec<Program>) -> Recommendation {
        Recommendation {
            scores: vec![
                SubjectScore { subject: "Humanités, Littérature et Philosophie".into(), score: 2 },
                SubjectScore { subject: "Littératures, langues et culture de l'antiquité".into(), score: 2 },
                SubjectScore { subject: "Arts".into(), score: 1 },
            ],
            track: Track {
                keep: vec![
                    "Humanités, Littérature et Philosophie".into(),
                    "Littératures, langues et culture de l'antiquité".into(),
                ],
                drop: Some("Arts".into()),
            },
            programs,
        }
    }

    #[test]
    fn renders_track_and_programs() {
        let rec = recommendation(vec![
            Program::new(
                "Licence - Lettres classiques".into(),
                vec![
                    "Littératures, langues et culture de l'antiquité".into(),
                    "Humanités, Littérature et Philosophie".into(),
                ],
                2140,
                610,
            ),
            Program::new(
                "DU - Humanités | numérique".into(),
                vec!["Humanités, Littérature et Philosophie".into()],
                0,
                0,
            ),
        ]);
        let profile = profile();
        let ctx = ReportContext::new(&profile, &rec, "2024.1");
        let out = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(out.contains("*Catalog version 2024.1*"));
        assert!(out.contains("| **Interests** | Music |"));
        assert!(out.contains("| 3 | Arts | 1 |"));
        assert!(out.contains("- **To drop later:** Arts"));
        assert!(out.contains("| 2140 | 28.5% |"));
        assert!(out.contains("DU - Humanités \\| numérique"));
        assert!(out.contains("| 0 | n/a |"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn renders_informational_line_without_matches() {
        let rec = recommendation(Vec::new());
        let profile = profile();
        let ctx = ReportContext::new(&profile, &rec, "2024.1");
        let out = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(out.contains("No matching university formations found"));
        assert!(!out.contains("| Formation |"));
    }
}
