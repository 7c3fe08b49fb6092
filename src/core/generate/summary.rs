//! Generation report
//!
//! Summarises a run: document counts on both sides of the batching loop,
//! optional content digests, and where the outputs went.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

const RULE: &str = "========================================";

/// Outcome of one generator run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,

    /// Documents read from the source
    pub input_count: usize,

    /// Documents in the reconstructed set
    pub output_count: usize,

    /// Changeset ids in emission order
    pub changeset_ids: Vec<String>,

    /// Document count of each changeset
    pub batch_sizes: Vec<usize>,

    /// SHA-256 of the input documents, when checksums are enabled
    pub input_checksum: Option<String>,

    /// SHA-256 of the reconstructed documents, when checksums are enabled
    pub output_checksum: Option<String>,

    /// Changelog destination
    pub changelog_path: PathBuf,

    /// Reconstructed file destination
    pub verify_path: PathBuf,

    /// Whether the files were actually written
    pub written: bool,

    /// Wall-clock duration of the run
    #[serde(skip)]
    pub duration: Duration,
}

impl GenerationReport {
    /// Whether input and reconstructed counts are equal
    pub fn counts_match(&self) -> bool {
        self.input_count == self.output_count
    }

    /// Input count minus output count
    pub fn difference(&self) -> i64 {
        self.input_count as i64 - self.output_count as i64
    }

    /// Digest comparison, `None` when checksums were not computed
    pub fn checksums_match(&self) -> Option<bool> {
        match (&self.input_checksum, &self.output_checksum) {
            (Some(input), Some(output)) => Some(input == output),
            _ => None,
        }
    }

    /// Counts equal and, when computed, digests equal
    pub fn is_success(&self) -> bool {
        self.counts_match() && self.checksums_match() != Some(false)
    }

    /// Number of changesets emitted
    pub fn changeset_count(&self) -> usize {
        self.changeset_ids.len()
    }

    /// Format the report as printed at the end of a run
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push('\n');
        summary.push_str(RULE);
        summary.push_str("\n📊 REPORTE DE EJECUCIÓN\n");
        summary.push_str(RULE);
        summary.push('\n');
        summary.push_str(&format!("Entrada: {} documentos\n", self.input_count));
        summary.push_str(&format!("Salida:  {} documentos\n", self.output_count));
        summary.push_str(&format!("Changesets: {}\n", self.changeset_count()));
        if let (Some(input), Some(output)) = (&self.input_checksum, &self.output_checksum) {
            summary.push_str(&format!("Checksum entrada: {input}\n"));
            summary.push_str(&format!("Checksum salida:  {output}\n"));
        }
        summary.push_str(&format!("Duración: {} ms\n", self.duration.as_millis()));

        if !self.written {
            summary.push_str("\n🔍 DRY RUN: no se escribió ningún archivo.\n");
        }

        if !self.counts_match() {
            summary.push_str(&format!(
                "\n⚠️ ALERTA: Hay una diferencia de {} documentos.\n",
                self.difference()
            ));
        } else if self.checksums_match() == Some(false) {
            summary.push_str(
                "\n⚠️ ALERTA: La cantidad coincide pero el contenido reconstruido difiere del origen.\n",
            );
        } else {
            summary.push_str("\n✅ ¡ÉXITO TOTAL! La cantidad de documentos coincide.\n");
            if self.written {
                let folder = self
                    .verify_path
                    .parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                summary.push_str(&format!(
                    "   Revisa la carpeta '{folder}' para validar los datos.\n"
                ));
            }
        }

        summary
    }
}
