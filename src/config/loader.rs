//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{InputMode, SeedlogConfig};
use crate::domain::errors::SeedlogError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SeedlogConfig
/// 4. Applies environment variable overrides (SEEDLOG_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, if a referenced
/// environment variable is unset, or if parsing or validation fails.
///
/// # Examples
///
/// ```no_run
/// use seedlog::config::loader::load_config;
///
/// let config = load_config("seedlog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SeedlogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SeedlogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SeedlogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SeedlogConfig = toml::from_str(&contents)
        .map_err(|e| SeedlogError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SeedlogError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration from `path` when given, otherwise starts from defaults
///
/// Environment overrides apply in both cases.
pub fn load_or_default(path: Option<&str>) -> Result<SeedlogConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = SeedlogConfig::default();
            apply_env_overrides(&mut config)?;
            config.validate().map_err(|e| {
                SeedlogError::Configuration(format!("Configuration validation failed: {e}"))
            })?;
            Ok(config)
        }
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SeedlogError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SeedlogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SEEDLOG_* prefix
///
/// Environment variables follow the pattern: SEEDLOG_<SECTION>_<KEY>
/// For example: SEEDLOG_INPUT_PATH, SEEDLOG_CHANGELOG_BATCH_SIZE
fn apply_env_overrides(config: &mut SeedlogConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SEEDLOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Input overrides
    if let Ok(val) = std::env::var("SEEDLOG_INPUT_PATH") {
        config.input.path = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_INPUT_MODE") {
        config.input.mode = InputMode::from_str(&val)?;
    }

    // Changelog overrides
    if let Ok(val) = std::env::var("SEEDLOG_CHANGELOG_OUTPUT_PATH") {
        config.changelog.output_path = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_CHANGELOG_COLLECTION_NAME") {
        config.changelog.collection_name = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_CHANGELOG_AUTHOR_ID") {
        config.changelog.author_id = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_CHANGELOG_BATCH_SIZE") {
        config.changelog.batch_size = val.parse().map_err(|_| {
            SeedlogError::Configuration(format!(
                "SEEDLOG_CHANGELOG_BATCH_SIZE must be a positive integer, got '{val}'"
            ))
        })?;
    }

    // Verification overrides
    if let Ok(val) = std::env::var("SEEDLOG_VERIFICATION_VERIFY_DIR") {
        config.verification.verify_dir = val;
    }
    if let Ok(val) = std::env::var("SEEDLOG_VERIFICATION_VERIFY_FILE") {
        config.verification.verify_file = Some(val);
    }
    if let Ok(val) = std::env::var("SEEDLOG_VERIFICATION_ENABLE_CHECKSUM") {
        config.verification.enable_checksum = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SEEDLOG_VERIFICATION_FAIL_ON_MISMATCH") {
        config.verification.fail_on_mismatch = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SEEDLOG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SEEDLOG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SEEDLOG_LOADER_TEST_AUTHOR", "data-team");
        let input = "author_id = \"${SEEDLOG_LOADER_TEST_AUTHOR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "author_id = \"data-team\"\n");
        std::env::remove_var("SEEDLOG_LOADER_TEST_AUTHOR");
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# path = \"${SEEDLOG_LOADER_TEST_UNSET_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SEEDLOG_LOADER_TEST_UNSET_IN_COMMENT}"));
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SEEDLOG_LOADER_TEST_MISSING");
        let input = "path = \"${SEEDLOG_LOADER_TEST_MISSING}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-seedlog.toml");
        assert!(matches!(result, Err(SeedlogError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[input]
path = "data/students.json"
mode = "strict"

[changelog]
output_path = "db/010_students.yaml"
collection_name = "students"
author_id = "data-team"
batch_size = 250
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.input.path, "data/students.json");
        assert_eq!(config.input.mode, InputMode::Strict);
        assert_eq!(config.changelog.collection_name, "students");
        assert_eq!(config.changelog.batch_size, 250);
        assert_eq!(config.verification.verify_dir, "temp");
    }

    #[test]
    fn test_load_config_rejects_zero_batch_size() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[changelog]\nbatch_size = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }
}
