//! Liquibase changeset rendering
//!
//! Each batch becomes one `insertMany` changeset whose `documents` payload is
//! the ASCII-escaped JSON array of that batch, written as a folded block scalar.

use super::ascii::to_ascii_json;
use super::batch::Batch;
use crate::domain::ids::{AuthorId, ChangeSetId, CollectionName};
use crate::domain::Result;

/// Top-level key of the changelog document
pub const CHANGELOG_HEADER: &str = "databaseChangeLog:\n";

/// One `insertMany` changeset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Deterministic id, `import-<collection>-batch-<n>`
    pub id: ChangeSetId,
    /// Author tag
    pub author: AuthorId,
    /// Target collection
    pub collection: CollectionName,
    /// Number of documents in the payload
    pub document_count: usize,
    /// ASCII-only JSON array of the batch
    pub documents: String,
}

impl ChangeSet {
    /// Builds the changeset for `batch`
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be serialized.
    pub fn for_batch(collection: &CollectionName, author: &AuthorId, batch: &Batch) -> Result<Self> {
        Ok(Self {
            id: ChangeSetId::for_batch(collection, batch.index),
            author: author.clone(),
            collection: collection.clone(),
            document_count: batch.len(),
            documents: to_ascii_json(&batch.records)?,
        })
    }

    /// Renders the changeset as a `databaseChangeLog` sequence entry,
    /// followed by a blank line
    pub fn to_yaml(&self) -> String {
        let mut out = String::with_capacity(self.documents.len() + 256);
        out.push_str("  - changeSet:\n");
        out.push_str(&format!("      id: {}\n", self.id));
        out.push_str(&format!("      author: {}\n", self.author));
        out.push_str("      changes:\n");
        out.push_str("        - insertMany:\n");
        out.push_str(&format!("            collectionName: {}\n", self.collection));
        out.push_str("            documents: >-\n");
        out.push_str(&format!("              {}\n\n", self.documents));
        out
    }
}

/// Concatenates the changesets under a single `databaseChangeLog` key
pub fn render_changelog(changesets: &[ChangeSet]) -> String {
    let body_len: usize = changesets.iter().map(|c| c.documents.len() + 256).sum();
    let mut out = String::with_capacity(CHANGELOG_HEADER.len() + body_len);
    out.push_str(CHANGELOG_HEADER);
    for changeset in changesets {
        out.push_str(&changeset.to_yaml());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changeset(records: Vec<serde_json::Value>, index: usize) -> ChangeSet {
        let collection = CollectionName::new("subjects").unwrap();
        let author = AuthorId::new("dilan-corredor").unwrap();
        ChangeSet::for_batch(&collection, &author, &Batch::new(index, records)).unwrap()
    }

    #[test]
    fn test_for_batch() {
        let cs = changeset(vec![json!({"a": 1}), json!({"a": 2})], 0);
        assert_eq!(cs.id.as_str(), "import-subjects-batch-1");
        assert_eq!(cs.document_count, 2);
        assert_eq!(cs.documents, r#"[{"a":1},{"a":2}]"#);
    }

    #[test]
    fn test_to_yaml_layout() {
        let cs = changeset(vec![json!({"a": 1})], 1);
        let expected = concat!(
            "  - changeSet:\n",
            "      id: import-subjects-batch-2\n",
            "      author: dilan-corredor\n",
            "      changes:\n",
            "        - insertMany:\n",
            "            collectionName: subjects\n",
            "            documents: >-\n",
            "              [{\"a\":1}]\n",
            "\n",
        );
        assert_eq!(cs.to_yaml(), expected);
    }

    #[test]
    fn test_render_changelog_header_and_order() {
        let text = render_changelog(&[
            changeset(vec![json!({"a": 1})], 0),
            changeset(vec![json!({"a": 2})], 1),
        ]);
        assert!(text.starts_with("databaseChangeLog:\n  - changeSet:\n"));
        let first = text.find("import-subjects-batch-1").unwrap();
        let second = text.find("import-subjects-batch-2").unwrap();
        assert!(first < second);
        assert_eq!(text.matches("- changeSet:").count(), 2);
        assert!(text.contains("[{\"a\":1}]\n\n  - changeSet:"));
    }

    #[test]
    fn test_render_changelog_is_ascii() {
        let text = render_changelog(&[changeset(vec![json!({"nombre": "café"})], 0)]);
        assert!(text.is_ascii());
        assert!(text.contains(r#"caf\u00e9"#));
    }

    #[test]
    fn test_render_empty_changelog() {
        assert_eq!(render_changelog(&[]), "databaseChangeLog:\n");
    }
}
