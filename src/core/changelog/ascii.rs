//! ASCII-only JSON serialization
//!
//! The changelog is written as a 7-bit byte stream, so every non-ASCII
//! character in keys and string values is emitted as a `\uXXXX` escape
//! (a UTF-16 surrogate pair above U+FFFF). DEL is escaped too: it is ASCII
//! but not a printable YAML character.

use crate::domain::{Result, SeedlogError};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Compact JSON formatter that escapes non-ASCII characters
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            if start < i {
                writer.write_all(fragment[start..i].as_bytes())?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serializes `value` as compact, ASCII-only JSON
///
/// # Examples
///
/// ```
/// use seedlog::core::changelog::to_ascii_json;
/// use serde_json::json;
///
/// let json = to_ascii_json(&json!([{"name": "café"}])).unwrap();
/// assert_eq!(json, r#"[{"name":"caf\u00e9"}]"#);
/// ```
pub fn to_ascii_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| SeedlogError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_plain_ascii_is_unchanged() {
        let value = json!({"name": "Calculo", "credits": 4, "tags": ["a", "b"]});
        assert_eq!(
            to_ascii_json(&value).unwrap(),
            serde_json::to_string(&value).unwrap()
        );
    }

    #[test]
    fn test_latin_characters_are_escaped() {
        let json = to_ascii_json(&json!({"materia": "Física Ñ"})).unwrap();
        assert_eq!(json, r#"{"materia":"F\u00edsica \u00d1"}"#);
        assert!(json.is_ascii());
    }

    #[test]
    fn test_keys_are_escaped() {
        let json = to_ascii_json(&json!({"año": 2024})).unwrap();
        assert_eq!(json, r#"{"a\u00f1o":2024}"#);
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        let json = to_ascii_json(&json!("ok 🚀")).unwrap();
        assert_eq!(json, r#""ok \ud83d\ude80""#);
    }

    #[test]
    fn test_standard_escapes_still_apply() {
        let json = to_ascii_json(&json!("line\n\"quoted\"\té")).unwrap();
        assert_eq!(json, r#""line\n\"quoted\"\t\u00e9""#);
    }

    #[test]
    fn test_delete_character_is_escaped() {
        let json = to_ascii_json(&json!({"a": "x\u{7f}y"})).unwrap();
        assert_eq!(json, r#"{"a":"x\u007fy"}"#);
        assert!(!json.bytes().any(|b| b == 0x7f));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["a"], "x\u{7f}y");
    }

    #[test]
    fn test_escaped_output_parses_back_to_original() {
        let value = json!([{"nombre": "José", "ciudad": "Bucaramanga", "nota": "€ 10"}]);
        let json = to_ascii_json(&value).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(to_ascii_json(&value).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }
}
