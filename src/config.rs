//! Configuration module for the spécialités advisor

use crate::core::profile::{DEFAULT_STRENGTH_WEIGHT, MAX_STRENGTH_WEIGHT, MIN_STRENGTH_WEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the advisor's config directory
const HOME_VARIABLE: &str = "$ADVISOR_HOME";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Program dataset CSV
    #[serde(default)]
    pub dataset: String,
    /// Catalog TOML replacing the built-in one (empty = built-in)
    #[serde(default)]
    pub catalog: String,
    /// Directory for exported CSV files
    #[serde(default)]
    pub out_dir: String,
    /// Directory for report files
    #[serde(default)]
    pub reports_dir: String,
}

/// Recommendation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Weight of each strength when the CLI does not pass `--weight`
    #[serde(default = "default_strength_weight")]
    pub strength_weight: u32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            strength_weight: DEFAULT_STRENGTH_WEIGHT,
        }
    }
}

const fn default_strength_weight() -> u32 {
    DEFAULT_STRENGTH_WEIGHT
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Recommendation settings
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override dataset path
    pub dataset: Option<String>,
    /// Override catalog path
    pub catalog: Option<String>,
    /// Override export directory
    pub out_dir: Option<String>,
    /// Override reports directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$ADVISOR_HOME` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/specadvisor`
    /// - macOS: `~/Library/Application Support/specadvisor`
    /// - Windows: `%APPDATA%\specadvisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("specadvisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled, so
    /// upgrading picks up new settings without touching user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.dataset, &defaults.paths.dataset),
            (&mut self.paths.catalog, &defaults.paths.catalog),
            (&mut self.paths.out_dir, &defaults.paths.out_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not modified. Only
    /// non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(dataset) = &overrides.dataset {
            self.paths.dataset.clone_from(dataset);
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_advisor_dir`](Self::get_advisor_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ADVISOR_HOME` in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(HOME_VARIABLE) {
            let advisor_dir = Self::get_advisor_dir();
            value.replace(HOME_VARIABLE, advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$ADVISOR_HOME` is expanded in
    /// every path value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.dataset = Self::expand_variables(&config.paths.dataset);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults if missing
    ///
    /// An existing file has missing fields merged from defaults and is rewritten
    /// when that changed anything.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation or the write fails
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `dataset`, `catalog`,
    /// `out_dir`, `reports_dir`, `strength_weight`. Dashed spellings are accepted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "dataset" => Some(self.paths.dataset.clone()),
            "catalog" => Some(self.paths.catalog.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "strength_weight" | "strength-weight" => {
                Some(self.recommendation.strength_weight.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    /// (`verbose` must be a boolean, `strength_weight` an integer from 1 to 5)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "dataset" => self.paths.dataset = value.to_string(),
            "catalog" => self.paths.catalog = value.to_string(),
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "strength_weight" | "strength-weight" => {
                let weight = value
                    .parse::<u32>()
                    .ok()
                    .filter(|w| (MIN_STRENGTH_WEIGHT..=MAX_STRENGTH_WEIGHT).contains(w))
                    .ok_or_else(|| {
                        format!(
                            "Invalid value for 'strength_weight': '{value}' (expected {MIN_STRENGTH_WEIGHT}-{MAX_STRENGTH_WEIGHT})"
                        )
                    })?;
                self.recommendation.strength_weight = weight;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "dataset" => self.paths.dataset.clone_from(&defaults.paths.dataset),
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "strength_weight" | "strength-weight" => {
                self.recommendation.strength_weight = defaults.recommendation.strength_weight;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Set `key` in the stored config at `config_file` and save it
    ///
    /// Starts from what is on disk, not from a config carrying per-run overrides,
    /// so only `key` changes in the file. Returns the stored config after the edit.
    ///
    /// # Errors
    /// Returns an error if the key or value is rejected or the file cannot be written
    pub fn persist_set(config_file: &Path, key: &str, value: &str) -> Result<Self, String> {
        let mut stored = Self::load_from(config_file);
        stored.set(key, value)?;
        stored
            .save_to(config_file)
            .map_err(|e| format!("Failed to save config: {e}"))?;
        Ok(stored)
    }

    /// Reset `key` to its default in the stored config at `config_file` and save it
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the file cannot be written
    pub fn persist_unset(config_file: &Path, key: &str, defaults: &Self) -> Result<Self, String> {
        let mut stored = Self::load_from(config_file);
        stored.unset(key, defaults)?;
        stored
            .save_to(config_file)
            .map_err(|e| format!("Failed to save config: {e}"))?;
        Ok(stored)
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  dataset = \"{}\"", self.paths.dataset)?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[recommendation]")?;
        writeln!(
            f,
            "  strength_weight = {}",
            self.recommendation.strength_weight
        )?;

        Ok(())
    }
}
