//! Configuration for `shotlog`
//!
//! Settings live in a TOML file under the platform config directory
//! (`config.toml`, or `dconfig.toml` for debug builds). Missing fields are
//! filled from the compiled-in defaults on load, and `$SHOTLOG` in any path
//! expands to the config directory.

use crate::core::models::{DistanceUnit, Mode};
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to [`Config::get_shotlog_dir`] in path values
pub const DIR_VARIABLE: &str = "$SHOTLOG";

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

/// Shot store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the `SQLite` database
    #[serde(default)]
    pub database: String,
}

/// Output directories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated reports
    #[serde(default)]
    pub reports_dir: String,
    /// Directory for CSV and JSON exports
    #[serde(default)]
    pub exports_dir: String,
}

/// Defaults for the `record` command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Unit distances are entered in unless a flag says otherwise
    #[serde(default)]
    pub distance_unit: String,
    /// Mode new shots are recorded in
    #[serde(default)]
    pub mode: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Recording defaults
    #[serde(default)]
    pub recording: RecordingConfig,
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
    /// Override database path
    pub database: Option<String>,
    /// Override reports directory
    pub reports_dir: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
}

/// Fill `target` from `default` when it is empty. Returns whether it changed.
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Directory holding the config file, and by default the database
    ///
    /// - Linux: `~/.config/shotlog`
    /// - macOS: `~/Library/Application Support/shotlog`
    /// - Windows: `%APPDATA%\shotlog`
    #[must_use]
    pub fn get_shotlog_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shotlog")
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Only fields that are empty here and non-empty in `defaults` change, so
    /// upgrading adds new settings without touching the user's.
    ///
    /// Returns `true` if any field was filled in.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let filled = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.store.database, &defaults.store.database),
            fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            fill_empty(&mut self.paths.exports_dir, &defaults.paths.exports_dir),
            fill_empty(
                &mut self.recording.distance_unit,
                &defaults.recording.distance_unit,
            ),
            fill_empty(&mut self.recording.mode, &defaults.recording.mode),
        ];
        filled.contains(&true)
    }

    /// Apply CLI-provided overrides for this run only.
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
        if let Some(database) = &overrides.database {
            self.store.database.clone_from(database);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
    }

    /// Full path of the user config file.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_shotlog_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_shotlog_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML config and expand `$SHOTLOG` in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.store.database = Self::expand_variables(&config.store.database);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Compiled-in defaults for this build profile.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config, creating it from defaults on first run.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// [`load`](Self::load) from an explicit file.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save to the user config file.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save to an explicit file, creating its directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a value by key, e.g. `level` or `database`.
    ///
    /// Keys accept `-` in place of `_`. Returns `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "database" | "db" => Some(self.store.database.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            "distance_unit" | "distance-unit" => Some(self.recording.distance_unit.clone()),
            "mode" => Some(self.recording.mode.clone()),
            _ => None,
        }
    }

    /// Set a value by key. Call [`save`](Self::save) to persist it.
    ///
    /// # Errors
    /// Returns an error for unknown keys and for values that do not parse
    /// (levels, booleans, units and modes are checked).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = Level::parse(value)
                    .ok_or_else(|| format!("Invalid log level: '{value}'"))?;
                self.logging.level = format!("{level:?}").to_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "database" | "db" => self.store.database = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            "distance_unit" | "distance-unit" => {
                let unit: DistanceUnit = value.parse().map_err(|e| format!("{e}"))?;
                self.recording.distance_unit = unit.to_string();
            }
            "mode" => {
                let mode: Mode = value.parse().map_err(|e| format!("{e}"))?;
                self.recording.mode = mode.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single value to its default.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "database" | "db" => self.store.database.clone_from(&defaults.store.database),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            "distance_unit" | "distance-unit" => self
                .recording
                .distance_unit
                .clone_from(&defaults.recording.distance_unit),
            "mode" => self.recording.mode.clone_from(&defaults.recording.mode),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file; the next [`load`](Self::load) recreates it.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Database path, falling back to `shots.db` in the config directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        if self.store.database.is_empty() {
            Self::get_shotlog_dir().join("shots.db")
        } else {
            PathBuf::from(&self.store.database)
        }
    }

    /// Default entry unit; unparseable values fall back to yards.
    #[must_use]
    pub fn distance_unit(&self) -> DistanceUnit {
        self.recording.distance_unit.parse().unwrap_or_default()
    }

    /// Default recording mode; unparseable values fall back to the range.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.recording.mode.parse().unwrap_or_default()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[store]")?;
        writeln!(f, "  database = \"{}\"", self.store.database)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        writeln!(f, "\n[recording]")?;
        writeln!(f, "  distance_unit = \"{}\"", self.recording.distance_unit)?;
        writeln!(f, "  mode = \"{}\"", self.recording.mode)?;

        Ok(())
    }
}
