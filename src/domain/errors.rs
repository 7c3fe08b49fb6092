//! Domain error types
//!
//! This module defines the error hierarchy for Seedlog. Every fatal condition
//! the generator can hit maps to one variant; third-party error types are
//! converted to strings at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main Seedlog error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum SeedlogError {
    /// The source file does not exist
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The source text is not valid JSON, even after repair
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors (directory creation, file writes)
    #[error("I/O error: {0}")]
    Io(String),

    /// Reconstructed output does not match the input and the mismatch is blocking
    #[error("Count mismatch: {input} input documents, {output} reconstructed")]
    CountMismatch { input: usize, output: usize },
}

impl SeedlogError {
    /// Wraps an I/O error with the path it occurred on
    pub fn io_at(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        SeedlogError::Io(format!("{}: {}", path.as_ref().display(), err))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SeedlogError {
    fn from(err: std::io::Error) -> Self {
        SeedlogError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SeedlogError {
    fn from(err: serde_json::Error) -> Self {
        SeedlogError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SeedlogError {
    fn from(err: toml::de::Error) -> Self {
        SeedlogError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = SeedlogError::MissingInput(PathBuf::from("data/missing.json"));
        assert_eq!(err.to_string(), "Input file not found: data/missing.json");
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = SeedlogError::CountMismatch {
            input: 250,
            output: 249,
        };
        assert_eq!(
            err.to_string(),
            "Count mismatch: 250 input documents, 249 reconstructed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SeedlogError = io_err.into();
        assert!(matches!(err, SeedlogError::Io(_)));
    }

    #[test]
    fn test_io_at_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = SeedlogError::io_at("out/changelog.yaml", io_err);
        assert!(err.to_string().contains("out/changelog.yaml"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SeedlogError = json_err.into();
        assert!(matches!(err, SeedlogError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: SeedlogError = toml_err.into();
        assert!(matches!(err, SeedlogError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_seedlog_error_implements_std_error() {
        let err = SeedlogError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
