// Rust guideline compliant 2026-10-16

//! Configuration management for Ruru.

use crate::{match_one, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the configuration file inside a config directory.
pub const CONFIG_FILE_NAME: &str = "ruru.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// One value per line.
    #[default]
    Plain,
}

impl OutputFormat {
    const NAMES: [&'static str; 2] = ["json", "plain"];

    /// Parses an output format name, accepting unambiguous abbreviations.
    ///
    /// # Errors
    ///
    /// Returns an error if the name matches no format.
    pub fn parse(value: &str) -> Result<Self> {
        match match_one(value, &Self::NAMES)?.as_str() {
            "json" => Ok(OutputFormat::Json),
            _ => Ok(OutputFormat::Plain),
        }
    }
}

/// Configuration for Ruru behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Whether several matches (and batch input) are accepted by default.
    #[serde(default)]
    pub several_ok: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Named choice sets, e.g. `themes = ["default", "dark"]`.
    #[serde(default)]
    pub sets: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/ruru.toml`, if present
    /// 3. Environment variables with `RURU_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory that may contain `ruru.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            Self::parse_file(&config_path)?
        } else {
            Self::default()
        };
        config.finish(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an explicit file path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::parse_file(path)?.finish(|key| std::env::var(key).ok())
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("{}: {}", path.display(), e.message()))
        })
    }

    fn finish<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_env_overrides(lookup)?;
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RURU_SEVERAL_OK` - Accept several matches (true/false)
    /// - `RURU_OUTPUT_FORMAT` - Output format (json/plain, abbreviations allowed)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("RURU_SEVERAL_OK") {
            self.several_ok = val.parse().map_err(|_| {
                Error::InvalidConfig("RURU_SEVERAL_OK must be true or false".to_string())
            })?;
        }

        if let Some(val) = lookup("RURU_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).map_err(|e| {
                Error::InvalidConfig(format!("RURU_OUTPUT_FORMAT: {}", e))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A set has an empty name
    /// - A set has no choices
    /// - A set contains an empty choice, which can never be matched
    pub fn validate(&self) -> Result<()> {
        for (name, choices) in &self.sets {
            if name.is_empty() {
                return Err(Error::InvalidConfig(
                    "set names must not be empty".to_string(),
                ));
            }
            if choices.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "set '{}' must contain at least one choice",
                    name
                )));
            }
            if choices.iter().any(String::is_empty) {
                return Err(Error::InvalidConfig(format!(
                    "set '{}' contains an empty choice",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Returns the choices of a named set.
    ///
    /// The set name itself is resolved by partial matching, so `th` finds
    /// `themes` when no other set starts with `th`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name matches no set or several sets.
    pub fn choices(&self, name: &str) -> Result<&[String]> {
        let names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        let resolved = match_one(name, &names)?;
        self.sets
            .get(&resolved)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::InvalidConfig(format!("Unknown set: {}", resolved)))
    }

    /// Saves the configuration to `<dir>/ruru.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
