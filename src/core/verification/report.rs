//! Verification report structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of comparing the source file against the files a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// When the verification was performed
    pub verified_at: DateTime<Utc>,

    /// Source file that was re-read
    pub source_path: PathBuf,

    /// Documents in the source file
    pub source_count: usize,

    /// Documents in the reconstructed audit file
    pub reconstructed_count: usize,

    /// Documents across all changesets of the changelog, when it was checked
    pub changelog_count: Option<usize>,

    /// Number of changesets found in the changelog
    pub changeset_count: Option<usize>,

    /// Whether the changelog is pure 7-bit ASCII
    pub changelog_ascii: Option<bool>,

    /// SHA-256 of the source documents
    pub source_checksum: String,

    /// SHA-256 of the reconstructed documents
    pub reconstructed_checksum: String,

    /// SHA-256 of the changelog documents
    pub changelog_checksum: Option<String>,

    /// 0-based position of the first reconstructed document that differs from the source
    pub first_difference: Option<usize>,
}

impl VerificationReport {
    /// Whether every check passed
    pub fn is_success(&self) -> bool {
        let changelog_ok = match (&self.changelog_count, &self.changelog_checksum) {
            (Some(count), Some(checksum)) => {
                *count == self.source_count && *checksum == self.source_checksum
            }
            _ => true,
        };
        self.source_count == self.reconstructed_count
            && self.source_checksum == self.reconstructed_checksum
            && self.first_difference.is_none()
            && self.changelog_ascii.unwrap_or(true)
            && changelog_ok
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("📊 Reporte de verificación\n");
        summary.push_str(&format!("  Verificado: {}\n", self.verified_at));
        summary.push_str(&format!("  Origen: {}\n", self.source_path.display()));
        summary.push_str(&format!("  Documentos en origen: {}\n", self.source_count));
        summary.push_str(&format!(
            "  Documentos reconstruidos: {}\n",
            self.reconstructed_count
        ));
        if let (Some(count), Some(changesets)) = (self.changelog_count, self.changeset_count) {
            summary.push_str(&format!(
                "  Documentos en changelog: {count} ({changesets} changesets)\n"
            ));
        }
        summary.push_str(&format!("  Checksum origen: {}\n", self.source_checksum));
        summary.push_str(&format!(
            "  Checksum reconstruido: {}\n",
            self.reconstructed_checksum
        ));
        if let Some(checksum) = &self.changelog_checksum {
            summary.push_str(&format!("  Checksum changelog: {checksum}\n"));
        }
        if self.changelog_ascii == Some(false) {
            summary.push_str("  ⚠️ El changelog contiene bytes fuera de ASCII\n");
        }
        if let Some(index) = self.first_difference {
            summary.push_str(&format!(
                "  ⚠️ Primer documento distinto en la posición {index}\n"
            ));
        }
        if self.is_success() {
            summary.push_str("✅ Verificación correcta\n");
        } else {
            summary.push_str("❌ La verificación encontró diferencias\n");
        }
        summary
    }
}
