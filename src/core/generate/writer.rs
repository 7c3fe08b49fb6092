//! Output file writers
//!
//! Both outputs are written to a temporary file in the destination directory
//! and renamed into place, so a failed run never leaves a half-written file
//! behind. Missing parent directories are created.

use crate::domain::{Record, Result, SeedlogError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Directory that will hold `path`
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Creates the parent directory of `path` when missing
///
/// # Errors
///
/// Returns [`SeedlogError::Io`] if the directory cannot be created or an
/// existing entry on the way is not a directory.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = parent_dir(path);
    if parent.exists() && !parent.is_dir() {
        return Err(SeedlogError::Io(format!(
            "{}: exists and is not a directory",
            parent.display()
        )));
    }
    if !parent.exists() {
        tracing::debug!(dir = %parent.display(), "Creating output directory");
        fs::create_dir_all(parent).map_err(|e| SeedlogError::io_at(parent, e))?;
    }
    Ok(())
}

/// Atomically replaces `path` with `contents`
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    let parent = parent_dir(path);

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| SeedlogError::io_at(parent, e))?;
    tmp.write_all(contents)
        .map_err(|e| SeedlogError::io_at(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| SeedlogError::io_at(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| {
        SeedlogError::Io(format!(
            "{}: could not replace file ({})",
            path.display(),
            e.error.kind()
        ))
    })?;

    Ok(())
}

/// Writes the changelog, refusing any byte above 0x7E
pub fn write_changelog(path: &Path, changelog: &str) -> Result<()> {
    if let Some(pos) = changelog.bytes().position(|b| !b.is_ascii() || b == 0x7f) {
        return Err(SeedlogError::Serialization(format!(
            "changelog contains a non-printable or non-ASCII byte at offset {pos}"
        )));
    }
    write_atomic(path, changelog.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = changelog.len(), "Changelog written");
    Ok(())
}

/// Writes the reconstructed documents as a 2-space indented JSON array
/// with non-ASCII characters kept literal
pub fn write_reconstructed(path: &Path, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    write_atomic(path, json.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        documents = records.len(),
        "Reconstructed file written"
    );
    Ok(())
}
