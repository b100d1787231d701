//! Config command handler
//!
//! `get` shows the effective values of this run, CLI overrides included.
//! `set`, `unset` and `reset` edit the stored file only.

use crate::args::ConfigSubcommand;
use specialites_advisor::config::Config;
use specialites_advisor::{error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands.
///
/// `effective` is the loaded config with CLI overrides applied.
pub fn run(subcommand: Option<ConfigSubcommand>, effective: &Config, defaults: &Config) -> bool {
    let config_file = Config::get_config_file_path();
    let result = match subcommand {
        None => show(effective, None),
        Some(ConfigSubcommand::Get { key }) => show(effective, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => Config::persist_set(&config_file, &key, &value)
            .map(|_| {
                info!("Stored {key} = {value} in {}", config_file.display());
                println!("✓ Set {key} = {value}");
            }),
        Some(ConfigSubcommand::Unset { key }) => Config::persist_unset(&config_file, &key, defaults)
            .map(|stored| {
                let value = stored.get(&key).unwrap_or_default();
                info!("Reset {key} to default in {}", config_file.display());
                println!("✓ Reset {key} to default ({value})");
            }),
        Some(ConfigSubcommand::Reset) => reset(&config_file, &mut io::stdin().lock()),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            error!("config command failed: {e}");
            eprintln!("✗ {e}");
            false
        }
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

/// Delete the stored config after a y/yes answer on `input`
fn reset(config_file: &Path, input: &mut impl BufRead) -> Result<(), String> {
    if !config_file.exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset {} to defaults? (y/n): ", config_file.display());
    io::stdout().flush().ok();

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| format!("Failed to read confirmation: {e}"))?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        std::fs::remove_file(config_file)
            .map_err(|e| format!("Failed to remove config file: {e}"))?;
        info!("Removed {}", config_file.display());
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_removes_file_on_yes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("config.toml");
        Config::from_defaults().save_to(&file).expect("save");

        reset(&file, &mut "yes\n".as_bytes()).expect("reset");
        assert!(!file.exists());
    }

    #[test]
    fn reset_keeps_file_unless_confirmed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("config.toml");
        Config::from_defaults().save_to(&file).expect("save");

        reset(&file, &mut "n\n".as_bytes()).expect("reset");
        assert!(file.exists());
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(show(&Config::from_defaults(), Some("token")).is_err());
        assert!(show(&Config::from_defaults(), Some("dataset")).is_ok());
    }
}
