//! Identifier types with validation
//!
//! Collection names and author tags are embedded verbatim into the changelog
//! as plain YAML scalars, so they are validated up front instead of being
//! quoted on output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters that may not start a plain YAML scalar
const YAML_INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
    '`',
];

/// Plain scalars a YAML 1.1 loader resolves to null or a boolean
const YAML_RESERVED_WORDS: &[&str] = &[
    "~", "null", "true", "false", "y", "n", "yes", "no", "on", "off", "<<", "=",
];

/// Plain scalars a YAML 1.1 loader resolves to an int, float or timestamp
const YAML_TYPED_SCALAR: &str = r"^(?:[-+]?(?:0|[1-9][0-9_]*)|[-+]?0b[01_]+|[-+]?0[0-7_]+|[-+]?0x[0-9a-fA-F_]+|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+(?:\.[0-9_]*)?|[-+]?(?:[0-9][0-9_]*)?\.[0-9_]*(?:[eE][-+]?[0-9]+)?|[-+]?[0-9][0-9_]*[eE][-+]?[0-9]+|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN)|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt \t].*)?)$";

/// Whether `value` would be loaded as something other than a string
fn is_typed_scalar(value: &str) -> Result<bool, String> {
    if YAML_RESERVED_WORDS.contains(&value.to_lowercase().as_str()) {
        return Ok(true);
    }
    let typed = Regex::new(YAML_TYPED_SCALAR).map_err(|e| format!("invalid scalar pattern: {e}"))?;
    Ok(typed.is_match(value))
}

/// Checks that `value` can be written as an unquoted, ASCII-only YAML scalar
fn validate_plain_scalar(kind: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{kind} cannot be empty"));
    }
    if value.trim() != value {
        return Err(format!(
            "{kind} '{value}' has leading or trailing whitespace"
        ));
    }
    if !value.is_ascii() {
        return Err(format!("{kind} '{value}' must be ASCII"));
    }
    if value.chars().any(|c| c.is_ascii_control()) {
        return Err(format!("{kind} '{value}' contains control characters"));
    }
    if value.starts_with(YAML_INDICATORS) {
        return Err(format!(
            "{kind} '{value}' starts with a YAML indicator character"
        ));
    }
    if value.contains(": ") || value.contains(" #") || value.ends_with(':') {
        return Err(format!(
            "{kind} '{value}' is not a plain YAML scalar (contains ': ', ' #' or a trailing ':')"
        ));
    }
    if is_typed_scalar(value)? {
        return Err(format!(
            "{kind} '{value}' would be read as a number, boolean, null or date, not a string"
        ));
    }
    Ok(())
}

/// Target collection name
///
/// # Examples
///
/// ```
/// use seedlog::domain::ids::CollectionName;
/// use std::str::FromStr;
///
/// let collection = CollectionName::from_str("subjects").unwrap();
/// assert_eq!(collection.as_str(), "subjects");
/// assert!(CollectionName::from_str("bad: name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new CollectionName
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        validate_plain_scalar("Collection name", &name)?;
        Ok(Self(name))
    }

    /// Returns the collection name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Changeset author tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(String);

impl AuthorId {
    /// Creates a new AuthorId
    pub fn new(author: impl Into<String>) -> Result<Self, String> {
        let author = author.into();
        validate_plain_scalar("Author id", &author)?;
        Ok(Self(author))
    }

    /// Returns the author tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AuthorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Changeset identifier, `import-<collection>-batch-<n>` with a 1-based `n`
///
/// # Examples
///
/// ```
/// use seedlog::domain::ids::{ChangeSetId, CollectionName};
///
/// let collection = CollectionName::new("subjects").unwrap();
/// let id = ChangeSetId::for_batch(&collection, 0);
/// assert_eq!(id.as_str(), "import-subjects-batch-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeSetId(String);

impl ChangeSetId {
    /// Builds the identifier for the batch at 0-based `index`
    pub fn for_batch(collection: &CollectionName, index: usize) -> Self {
        Self(format!("import-{}-batch-{}", collection, index + 1))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChangeSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ChangeSetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_name_valid() {
        for name in ["subjects", "students_2024", "catalog.items", "my-collection"] {
            assert!(CollectionName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_collection_name_empty() {
        assert!(CollectionName::new("").is_err());
        assert!(CollectionName::new("   ").is_err());
    }

    #[test]
    fn test_collection_name_rejects_yaml_breaking_values() {
        assert!(CollectionName::new(" subjects").is_err());
        assert!(CollectionName::new("a: b").is_err());
        assert!(CollectionName::new("subjects #x").is_err());
        assert!(CollectionName::new("subjects:").is_err());
        assert!(CollectionName::new("[subjects]").is_err());
        assert!(CollectionName::new("sub\njects").is_err());
        assert!(CollectionName::new("materias_años").is_err());
    }

    #[test]
    fn test_collection_name_rejects_typed_scalars() {
        for name in [
            "123", "0x1f", "017", "1_000", "3.14", "1e5", "6.02e+23", "190:20:30", ".inf", ".NaN",
            "true", "False", "null", "NULL", "~", "yes", "No", "on", "OFF", "y", "2024-01-15",
        ] {
            assert!(CollectionName::new(name).is_err(), "{name} should be rejected");
        }
        assert!(AuthorId::new("true").is_err());
    }

    #[test]
    fn test_collection_name_accepts_string_like_scalars() {
        for name in ["subjects2024", "v1.2.3", "2024_subjects", "nullable", "yes_no", "0xzz", "e5"] {
            assert!(CollectionName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_author_id() {
        let author = AuthorId::from_str("dilan-corredor").unwrap();
        assert_eq!(author.to_string(), "dilan-corredor");
        assert!(AuthorId::new("*anchor").is_err());
    }

    #[test]
    fn test_changeset_id_is_one_based() {
        let collection = CollectionName::new("subjects").unwrap();
        assert_eq!(
            ChangeSetId::for_batch(&collection, 0).as_str(),
            "import-subjects-batch-1"
        );
        assert_eq!(
            ChangeSetId::for_batch(&collection, 2).as_str(),
            "import-subjects-batch-3"
        );
    }
}
