//! Readers for source text that is not a single JSON array

use crate::domain::{Record, Result, SeedlogError};
use serde_json::{Deserializer, Value};

/// Reads a sequence of JSON values separated by whitespace and optional commas
///
/// A single trailing comma is accepted. Each value is parsed by a real JSON
/// parser, so braces inside strings or nested objects are handled correctly.
///
/// # Errors
///
/// Returns [`SeedlogError::Parse`] naming the 1-based position of the value
/// that failed to parse.
pub fn read_concatenated(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let mut stream = Deserializer::from_str(rest).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => records.push(value),
            Some(Err(e)) => {
                return Err(SeedlogError::Parse(format!(
                    "value {}: {}",
                    records.len() + 1,
                    e
                )))
            }
            None => break,
        }

        rest = rest[stream.byte_offset()..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
        }
    }

    Ok(records)
}

/// Historical repair: every `}` gets a trailing comma, trailing commas are
/// trimmed and the result is wrapped in brackets
///
/// Only whitespace-separated flat objects survive this. A `}` inside a string
/// or a nested object is rewritten too, which corrupts the record; prefer
/// [`read_concatenated`].
///
/// # Examples
///
/// ```
/// use seedlog::core::input::legacy_repair;
///
/// assert_eq!(legacy_repair("{\"a\":1}\n{\"a\":2}"), "[{\"a\":1},\n{\"a\":2}]");
/// ```
pub fn legacy_repair(text: &str) -> String {
    let replaced = text.replace('}', "},");
    format!("[{}]", replaced.trim_end_matches(','))
}
