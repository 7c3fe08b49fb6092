//! Configuration schema types
//!
//! This module defines the configuration structure for Seedlog. Every section
//! has defaults, so an empty TOML file (or no file at all) yields a runnable
//! configuration.

use crate::domain::errors::SeedlogError;
use crate::domain::ids::{AuthorId, CollectionName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How source text that is not a JSON array is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Accept a JSON array, or a sequence of JSON values separated by
    /// optional commas and whitespace
    #[default]
    Tolerant,
    /// Accept only a JSON array
    Strict,
    /// Historical textual repair: wrap in brackets and put a comma after every `}`
    Legacy,
}

impl FromStr for InputMode {
    type Err = SeedlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tolerant" => Ok(Self::Tolerant),
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            _ => Err(SeedlogError::Configuration(format!(
                "Invalid input mode: {s}. Expected 'tolerant', 'strict' or 'legacy'"
            ))),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tolerant => "tolerant",
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        };
        write!(f, "{name}")
    }
}

/// Main Seedlog configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedlogConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source file settings
    #[serde(default)]
    pub input: InputConfig,

    /// Changelog output settings
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Reconstructed audit file settings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SeedlogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.changelog.validate()?;
        self.verification.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Path of the reconstructed audit file
    ///
    /// Defaults to `<verify_dir>/<collection>_reconstructed.json`.
    pub fn verify_path(&self) -> PathBuf {
        let file = self.verification.verify_file.clone().unwrap_or_else(|| {
            format!("{}_reconstructed.json", self.changelog.collection_name)
        });
        PathBuf::from(&self.verification.verify_dir).join(file)
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build everything, write nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level = self.log_level.trim().to_lowercase();
        if !valid_levels.contains(&level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Source file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the JSON source file
    #[serde(default = "default_input_path")]
    pub path: String,

    /// Handling of non-array input
    #[serde(default)]
    pub mode: InputMode,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("input.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            mode: InputMode::default(),
        }
    }
}

/// Changelog output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Destination of the YAML changelog
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Collection the documents are inserted into
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// Author tag written on every changeset
    #[serde(default = "default_author_id")]
    pub author_id: String,

    /// Maximum number of documents per changeset
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl ChangelogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_path.trim().is_empty() {
            return Err("changelog.output_path cannot be empty".to_string());
        }
        if self.batch_size == 0 {
            return Err("changelog.batch_size must be at least 1".to_string());
        }
        self.collection()?;
        self.author()?;
        Ok(())
    }

    /// Validated collection name
    pub fn collection(&self) -> Result<CollectionName, String> {
        CollectionName::new(self.collection_name.as_str())
            .map_err(|e| format!("changelog.collection_name: {e}"))
    }

    /// Validated author tag
    pub fn author(&self) -> Result<AuthorId, String> {
        AuthorId::new(self.author_id.as_str()).map_err(|e| format!("changelog.author_id: {e}"))
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            collection_name: default_collection_name(),
            author_id: default_author_id(),
            batch_size: default_batch_size(),
        }
    }
}

/// Reconstructed audit file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Directory that receives the reconstructed file (created when missing)
    #[serde(default = "default_verify_dir")]
    pub verify_dir: String,

    /// File name inside `verify_dir`; defaults to `<collection>_reconstructed.json`
    #[serde(default)]
    pub verify_file: Option<String>,

    /// Compare SHA-256 digests of input and reconstructed documents
    #[serde(default = "default_true")]
    pub enable_checksum: bool,

    /// Refuse to write any output when the counts differ
    #[serde(default)]
    pub fail_on_mismatch: bool,
}

impl VerificationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.verify_dir.trim().is_empty() {
            return Err("verification.verify_dir cannot be empty".to_string());
        }
        if let Some(file) = &self.verify_file {
            if file.trim().is_empty() {
                return Err("verification.verify_file cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            verify_dir: default_verify_dir(),
            verify_file: None,
            enable_checksum: true,
            fail_on_mismatch: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_input_path() -> String {
    "merged_subjects.json".to_string()
}

fn default_output_path() -> String {
    "009_migration_data_subjects.yaml".to_string()
}

fn default_collection_name() -> String {
    "subjects".to_string()
}

fn default_author_id() -> String {
    "seedlog".to_string()
}

fn default_batch_size() -> usize {
    100
}

fn default_verify_dir() -> String {
    "temp".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
