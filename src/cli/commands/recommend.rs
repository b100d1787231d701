//! Recommend command handler

use super::load_advisor;
use specialites_advisor::config::Config;
use specialites_advisor::core::export::{CsvExporter, ResultExporter, DEFAULT_EXPORT_FILE};
use specialites_advisor::core::report::{format_rate, ReportContext, ReportFormat};
use specialites_advisor::core::{Advisor, Recommendation, StudentProfile};
use specialites_advisor::{error, info, verbose, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base name of generated report files
const REPORT_FILE_STEM: &str = "specialites_recommendation";

/// Parsed arguments of the recommend subcommand
pub struct RecommendArgs {
    /// Interest labels in selection order
    pub interests: Vec<String>,
    /// Strength labels in selection order
    pub strengths: Vec<String>,
    /// Explicit strength weight, else the configured one
    pub weight: Option<u32>,
    /// Explicit CSV output path
    pub output: Option<PathBuf>,
    /// Report format name
    pub report: Option<String>,
    /// Skip CSV export
    pub no_csv: bool,
}

/// Run the recommend command.
///
/// Returns `false` when the request was rejected or an output could not be written.
pub fn run(args: &RecommendArgs, config: &Config) -> bool {
    match recommend(args, config) {
        Ok(()) => true,
        Err(err) => {
            error!("Recommendation failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

fn recommend(args: &RecommendArgs, config: &Config) -> Result<(), String> {
    // Parse the format before any work so a typo fails fast
    let format = args
        .report
        .as_deref()
        .map(ReportFormat::from_str)
        .transpose()
        .map_err(|e| format!("✗ {e} (expected markdown or html)"))?;

    let advisor = load_advisor(config).map_err(|e| format!("✗ Failed to load data: {e}"))?;

    let profile = StudentProfile::new(
        args.interests.clone(),
        args.strengths.clone(),
        args.weight.unwrap_or(config.recommendation.strength_weight),
    );

    for (kind, label) in profile.unknown_labels(advisor.catalog()) {
        warn!("Unknown {kind} '{label}' ignored");
        eprintln!("! Unknown {kind} '{label}' ignored (see `specadvisor catalog {kind}s`)");
    }

    let recommendation = advisor
        .recommend(&profile)
        .map_err(|e| format!("✗ {e}"))?;

    print_recommendation(&recommendation);

    if !args.no_csv && recommendation.has_matches() {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| Path::new(&config.paths.out_dir).join(DEFAULT_EXPORT_FILE));
        export(&recommendation, &output)?;
    }

    if let Some(format) = format {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        let report_path = reports_dir.join(format!("{REPORT_FILE_STEM}.{}", format.extension()));
        write_report(&advisor, &profile, &recommendation, format, &report_path)?;
    }

    Ok(())
}

fn print_recommendation(recommendation: &Recommendation) {
    println!("\n=== Recommended spécialités ===\n");
    if recommendation.track.is_empty() {
        println!("No subject scored; check the selected labels.");
        return;
    }

    println!("Keep: {}", recommendation.track.keep.join(", "));
    if let Some(drop) = &recommendation.track.drop {
        println!("Drop later: {drop}");
    }

    verbose!("\nScores:");
    for s in &recommendation.scores {
        verbose!("  {:<50} {}", s.subject, s.score);
    }

    if !recommendation.has_matches() {
        println!("\nNo matching university formations found for this combination.");
        return;
    }

    println!("\nMatching formations ({}):", recommendation.programs.len());
    for program in &recommendation.programs {
        println!(
            "  {:<60} {:>7} applicants  {:>6}",
            program.name,
            program.applicants,
            format_rate(program.admission_rate())
        );
    }
}

fn export(recommendation: &Recommendation, output: &Path) -> Result<(), String> {
    let rows = CsvExporter
        .export(&recommendation.programs, output)
        .map_err(|e| format!("✗ Failed to export formations to {}: {e}", output.display()))?;
    println!("✓ {rows} formations exported to: {}", output.display());
    info!("Exported {rows} formations to {}", output.display());
    Ok(())
}

fn write_report(
    advisor: &Advisor,
    profile: &StudentProfile,
    recommendation: &Recommendation,
    format: ReportFormat,
    report_path: &Path,
) -> Result<(), String> {
    let ctx = ReportContext::new(profile, recommendation, &advisor.catalog().version);
    format
        .generator()
        .generate(&ctx, report_path)
        .map_err(|e| format!("✗ Failed to write {format} report: {e}"))?;
    println!("✓ Report generated: {}", report_path.display());
    info!("Generated {format} report at {}", report_path.display());
    Ok(())
}
