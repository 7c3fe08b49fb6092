//! Checksum calculation for document sets
//!
//! Digests are computed over a canonical serialization with object keys
//! sorted, so re-serialization differences (key order, whitespace, escaping)
//! do not affect the result while record order does.

use crate::domain::{Record, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Calculate the SHA-256 checksum of an ordered document set
///
/// # Examples
///
/// ```
/// use seedlog::core::verification::calculate_checksum;
/// use serde_json::json;
///
/// let a = calculate_checksum(&[json!({"x": 1, "y": 2})]).unwrap();
/// let b = calculate_checksum(&[json!({"y": 2, "x": 1})]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn calculate_checksum(records: &[Record]) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(b"[");
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            hasher.update(b",");
        }
        let canonical = serde_json::to_vec(&normalize_json(record))?;
        hasher.update(&canonical);
    }
    hasher.update(b"]");
    Ok(format!("{:x}", hasher.finalize()))
}

/// Recursively sorts object keys
fn normalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, normalize_json(v))).collect();
            Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), v)).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize_json).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checksum_deterministic() {
        let records = vec![json!({"a": 1}), json!({"b": [1, 2, 3]})];
        assert_eq!(
            calculate_checksum(&records).unwrap(),
            calculate_checksum(&records).unwrap()
        );
    }

    #[test]
    fn test_checksum_ignores_nested_key_order() {
        let a = vec![json!({"outer": {"x": 1, "y": {"p": 1, "q": 2}}})];
        let b = vec![json!({"outer": {"y": {"q": 2, "p": 1}, "x": 1}})];
        assert_eq!(calculate_checksum(&a).unwrap(), calculate_checksum(&b).unwrap());
    }

    #[test]
    fn test_checksum_detects_record_order() {
        let a = vec![json!({"n": 1}), json!({"n": 2})];
        let b = vec![json!({"n": 2}), json!({"n": 1})];
        assert_ne!(calculate_checksum(&a).unwrap(), calculate_checksum(&b).unwrap());
    }

    #[test]
    fn test_checksum_detects_dropped_record() {
        let a = vec![json!({"n": 1}), json!({"n": 2})];
        let b = vec![json!({"n": 1})];
        assert_ne!(calculate_checksum(&a).unwrap(), calculate_checksum(&b).unwrap());
    }

    #[test]
    fn test_checksum_empty_set() {
        let checksum = calculate_checksum(&[]).unwrap();
        assert_eq!(checksum.len(), 64);
    }
}
