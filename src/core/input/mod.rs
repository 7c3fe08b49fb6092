//! Source file loading
//!
//! Reads the JSON source into an ordered list of [`Record`]s. The text is
//! expected to be a JSON array; what happens when it is not depends on the
//! configured [`InputMode`].

pub mod repair;

use crate::config::InputMode;
use crate::domain::{Record, Result, SeedlogError};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub use repair::{legacy_repair, read_concatenated};

const BOM: char = '\u{feff}';

/// Reads and parses the source file at `path`
///
/// # Errors
///
/// - [`SeedlogError::MissingInput`] if the file does not exist
/// - [`SeedlogError::Io`] if it cannot be read
/// - [`SeedlogError::Parse`] if it is not UTF-8 or not valid input for `mode`
pub fn read_source(path: impl AsRef<Path>, mode: InputMode) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SeedlogError::MissingInput(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| SeedlogError::io_at(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        SeedlogError::Parse(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        mode = %mode,
        "Source file read"
    );

    parse_source(&text, mode)
}

/// Parses source text into records
///
/// A leading byte-order mark and surrounding whitespace are ignored. Text
/// starting with `[` must be a JSON array in every mode.
///
/// # Examples
///
/// ```
/// use seedlog::config::InputMode;
/// use seedlog::core::input::parse_source;
///
/// let records = parse_source(r#"{"a":1},{"a":2}"#, InputMode::Tolerant).unwrap();
/// assert_eq!(records.len(), 2);
///
/// assert!(parse_source(r#"{"a":1},{"a":2}"#, InputMode::Strict).is_err());
/// ```
pub fn parse_source(text: &str, mode: InputMode) -> Result<Vec<Record>> {
    let text = text.strip_prefix(BOM).unwrap_or(text).trim();

    if text.starts_with('[') {
        return parse_array(text);
    }

    match mode {
        InputMode::Strict => Err(SeedlogError::Parse(
            "input is not a JSON array (strict mode)".to_string(),
        )),
        InputMode::Legacy => {
            tracing::warn!("Input is not a JSON array, applying legacy bracket repair");
            parse_array(&legacy_repair(text))
        }
        InputMode::Tolerant => {
            tracing::info!("Input is not a JSON array, reading concatenated values");
            read_concatenated(text)
        }
    }
}

fn parse_array(text: &str) -> Result<Vec<Record>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| SeedlogError::Parse(e.to_string()))?;
    match value {
        Value::Array(records) => Ok(records),
        other => Err(SeedlogError::Parse(format!(
            "expected a JSON array, found {}",
            value_kind(&other)
        ))),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
