//! CLI argument definitions for `specadvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use specialites_advisor::config::ConfigOverrides;
use specialites_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `dataset`, `strength_weight`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    /// List interest labels with the subjects they map to.
    Interests,
    /// List strength labels with the subjects they map to.
    Strengths,
    /// List the canonical spécialités.
    Subjects,
    /// Validate a catalog file and check the dataset against it.
    ///
    /// Without FILE, checks the configured catalog (or the built-in one).
    Check {
        /// Catalog TOML file to check
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Recommend two spécialités to keep and list matching formations.
    ///
    /// Interests add 1 point to each subject they map to, strengths add the
    /// strength weight.
    Recommend {
        /// Interest label (repeat for several, at most 5)
        #[arg(short, long = "interest", value_name = "INTEREST", required = true)]
        interests: Vec<String>,

        /// Strength label (repeat for several, at most 5)
        #[arg(short, long = "strength", value_name = "STRENGTH", required = true)]
        strengths: Vec<String>,

        /// Points per strength, 1 to 5 (defaults to config `strength_weight`)
        #[arg(short, long, value_name = "N")]
        weight: Option<u32>,

        /// Output CSV path (optional; defaults to config `out_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Generate a report in the specified format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Skip CSV export (only generate report when --report is used)
        #[arg(long)]
        no_csv: bool,
    },
    /// List formations requiring every given spécialité.
    Filter {
        /// Subject that must be required (repeat for several)
        #[arg(short, long = "keep", value_name = "SUBJECT", num_args = 1..)]
        keep: Vec<String>,

        /// Export the matching formations to a CSV file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Inspect the subject catalog.
    ///
    /// If no subcommand is provided, displays a summary of the catalog.
    Catalog {
        #[command(subcommand)]
        subcommand: Option<CatalogSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "specadvisor",
    about = "Spécialités advisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset path
    #[arg(long = "config-dataset", value_name = "FILE")]
    pub config_dataset: Option<PathBuf>,

    /// Override config dataset path (short form)
    #[arg(long = "dataset", value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog path (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

/// Pick the short-form path flag when given, else the long form
fn path_override(short: Option<&PathBuf>, long: Option<&PathBuf>) -> Option<String> {
    short
        .or(long)
        .map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--dataset`) take precedence over long-form flags
    /// (e.g., `--config-dataset`) when both are provided. `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            dataset: path_override(self.dataset.as_ref(), self.config_dataset.as_ref()),
            catalog: path_override(self.catalog.as_ref(), self.config_catalog.as_ref()),
            out_dir: path_override(self.out_dir.as_ref(), self.config_out_dir.as_ref()),
            reports_dir: path_override(
                self.reports_dir.as_ref(),
                self.config_reports_dir.as_ref(),
            ),
        }
    }
}
