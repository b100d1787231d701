//! Command-line interface entry point for `specadvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use specialites_advisor::config::Config;
use specialites_advisor::info;
use specialites_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag, then config logging.level, then warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &config, &defaults),
        Command::Recommend {
            interests,
            strengths,
            weight,
            output,
            report,
            no_csv,
        } => commands::recommend::run(
            &commands::recommend::RecommendArgs {
                interests,
                strengths,
                weight,
                output,
                report,
                no_csv,
            },
            &config,
        ),
        Command::Filter { keep, output } => {
            commands::filter::run(&keep, output.as_deref(), &config)
        }
        Command::Catalog { subcommand } => commands::catalog::run(subcommand, &config),
    };

    if !ok {
        std::process::exit(1);
    }
}
