//! Post-run verification
//!
//! Re-reads the source file and the files a run produced, then compares
//! document counts, SHA-256 digests and element order.

use super::checksum::calculate_checksum;
use super::report::VerificationReport;
use crate::config::InputMode;
use crate::core::changelog::CHANGELOG_HEADER;
use crate::core::input::{read_source, value_kind};
use crate::domain::{Record, Result, SeedlogError};
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::Path;

const DOCUMENTS_KEY: &str = "documents: >-";
const CHANGESET_KEY: &str = "- changeSet:";

/// Documents recovered from a generated changelog
#[derive(Debug, Clone)]
pub struct ChangelogContents {
    /// Number of changesets
    pub changesets: usize,
    /// Documents of every changeset, in order
    pub records: Vec<Record>,
    /// Whether the file is pure 7-bit ASCII
    pub ascii: bool,
}

/// Parses the `documents` payloads back out of a changelog file
///
/// # Errors
///
/// Returns [`SeedlogError::MissingInput`] if the file does not exist and
/// [`SeedlogError::Parse`] if it does not have the layout the generator writes.
pub fn read_changelog(path: impl AsRef<Path>) -> Result<ChangelogContents> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SeedlogError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| SeedlogError::io_at(path, e))?;
    let ascii = bytes.is_ascii();
    let text = String::from_utf8(bytes)
        .map_err(|e| SeedlogError::Parse(format!("{} is not valid UTF-8: {e}", path.display())))?;

    if !text.starts_with(CHANGELOG_HEADER) {
        return Err(SeedlogError::Parse(format!(
            "{} does not start with 'databaseChangeLog:'",
            path.display()
        )));
    }

    let mut changesets = 0;
    let mut records = Vec::new();
    let mut lines = text.lines().enumerate();
    while let Some((_, line)) = lines.next() {
        let trimmed = line.trim();
        if trimmed == CHANGESET_KEY {
            changesets += 1;
        } else if trimmed == DOCUMENTS_KEY {
            let (line_no, payload) = lines
                .by_ref()
                .find(|(_, l)| !l.trim().is_empty())
                .ok_or_else(|| {
                    SeedlogError::Parse("changelog ends before a documents payload".to_string())
                })?;
            let value: Value = serde_json::from_str(payload.trim()).map_err(|e| {
                SeedlogError::Parse(format!("changelog line {}: {e}", line_no + 1))
            })?;
            match value {
                Value::Array(batch) => records.extend(batch),
                other => {
                    return Err(SeedlogError::Parse(format!(
                        "changelog line {}: documents must be an array, found {}",
                        line_no + 1,
                        value_kind(&other)
                    )))
                }
            }
        }
    }

    Ok(ChangelogContents {
        changesets,
        records,
        ascii,
    })
}

/// Compares the source file with the reconstructed audit file and,
/// optionally, with the changelog
pub fn verify_files(
    source: impl AsRef<Path>,
    reconstructed: impl AsRef<Path>,
    changelog: Option<&Path>,
    mode: InputMode,
) -> Result<VerificationReport> {
    let source = source.as_ref();
    let source_records = read_source(source, mode)?;
    let reconstructed_records = read_source(reconstructed.as_ref(), InputMode::Strict)?;

    let changelog_contents = changelog.map(read_changelog).transpose()?;
    let changelog_checksum = changelog_contents
        .as_ref()
        .map(|c| calculate_checksum(&c.records))
        .transpose()?;

    let report = VerificationReport {
        verified_at: Utc::now(),
        source_path: source.to_path_buf(),
        source_count: source_records.len(),
        reconstructed_count: reconstructed_records.len(),
        changelog_count: changelog_contents.as_ref().map(|c| c.records.len()),
        changeset_count: changelog_contents.as_ref().map(|c| c.changesets),
        changelog_ascii: changelog_contents.as_ref().map(|c| c.ascii),
        source_checksum: calculate_checksum(&source_records)?,
        reconstructed_checksum: calculate_checksum(&reconstructed_records)?,
        changelog_checksum,
        first_difference: first_difference(&source_records, &reconstructed_records),
    };

    tracing::info!(
        source_count = report.source_count,
        reconstructed_count = report.reconstructed_count,
        success = report.is_success(),
        "Verification completed"
    );

    Ok(report)
}

/// Position of the first element that differs, or where the shorter set ends
fn first_difference(expected: &[Record], actual: &[Record]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))
}
