//! Generator - orchestrates one changelog run
//!
//! read source → partition → one changeset per batch → reassemble →
//! compare counts → write both outputs.
//!
//! The integrity check runs before anything is written, so a blocking
//! mismatch (`verification.fail_on_mismatch`) leaves no files behind.

use super::summary::GenerationReport;
use super::writer::{ensure_parent_dir, write_changelog, write_reconstructed};
use crate::config::SeedlogConfig;
use crate::core::changelog::{partition, render_changelog, Batch, ChangeSet};
use crate::core::input::read_source;
use crate::core::verification::calculate_checksum;
use crate::domain::ids::{AuthorId, ChangeSetId, CollectionName};
use crate::domain::{Record, Result, SeedlogError};
use crate::{log_batch_processing, log_generation_complete};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// In-memory result of the batching loop, before anything is written
#[derive(Debug, Clone)]
pub struct Generation {
    /// Complete changelog text (ASCII only)
    pub changelog: String,
    /// Changeset ids in emission order
    pub changeset_ids: Vec<ChangeSetId>,
    /// Document count of each changeset
    pub batch_sizes: Vec<usize>,
    /// Concatenation of every batch, in order
    pub reconstructed: Vec<Record>,
    /// Documents read from the source
    pub input_count: usize,
    /// SHA-256 of the input documents
    pub input_checksum: Option<String>,
    /// SHA-256 of the reconstructed documents
    pub output_checksum: Option<String>,
}

impl Generation {
    /// Documents in the reconstructed set
    pub fn output_count(&self) -> usize {
        self.reconstructed.len()
    }

    /// Whether input and reconstructed counts are equal
    pub fn counts_match(&self) -> bool {
        self.input_count == self.output_count()
    }
}

/// Builds the changelog and the reconstructed set from already partitioned batches
///
/// `input_count` is the size of the document set the batches were cut from;
/// it is carried through untouched so the caller can compare it with
/// [`Generation::output_count`].
pub fn assemble(
    collection: &CollectionName,
    author: &AuthorId,
    input_count: usize,
    batches: Vec<Batch>,
) -> Result<Generation> {
    let total = batches.len();
    let mut changesets = Vec::with_capacity(total);
    let mut reconstructed = Vec::with_capacity(input_count);

    for batch in batches {
        log_batch_processing!(batch.number(), total);
        let changeset = ChangeSet::for_batch(collection, author, &batch)?;
        tracing::debug!(
            id = %changeset.id,
            documents = changeset.document_count,
            "Changeset built"
        );
        reconstructed.extend(batch.records);
        changesets.push(changeset);
    }

    Ok(Generation {
        changelog: render_changelog(&changesets),
        changeset_ids: changesets.iter().map(|c| c.id.clone()).collect(),
        batch_sizes: changesets.iter().map(|c| c.document_count).collect(),
        reconstructed,
        input_count,
        input_checksum: None,
        output_checksum: None,
    })
}

/// Changelog generator bound to one configuration
pub struct Generator {
    config: SeedlogConfig,
    collection: CollectionName,
    author: AuthorId,
}

impl Generator {
    /// Create a new generator
    ///
    /// # Errors
    ///
    /// Returns [`SeedlogError::Configuration`] if the configuration does not validate.
    pub fn new(config: SeedlogConfig) -> Result<Self> {
        config.validate().map_err(SeedlogError::Configuration)?;
        let collection = config
            .changelog
            .collection()
            .map_err(SeedlogError::Configuration)?;
        let author = config
            .changelog
            .author()
            .map_err(SeedlogError::Configuration)?;

        Ok(Self {
            config,
            collection,
            author,
        })
    }

    /// The configuration this generator runs with
    pub fn config(&self) -> &SeedlogConfig {
        &self.config
    }

    /// Changelog destination
    pub fn changelog_path(&self) -> PathBuf {
        PathBuf::from(&self.config.changelog.output_path)
    }

    /// Reconstructed file destination
    pub fn verify_path(&self) -> PathBuf {
        self.config.verify_path()
    }

    /// Reads the configured source file
    pub fn read_input(&self) -> Result<Vec<Record>> {
        let path = Path::new(&self.config.input.path);
        tracing::info!(path = %path.display(), mode = %self.config.input.mode, "Reading source");
        let records = read_source(path, self.config.input.mode)?;
        tracing::info!(documents = records.len(), "Source documents read");
        Ok(records)
    }

    /// Runs the batching loop in memory
    pub fn generate(&self, records: Vec<Record>) -> Result<Generation> {
        let input_count = records.len();
        if input_count == 0 {
            tracing::warn!("Source contains no documents, the changelog will have no changesets");
        }

        let input_checksum = if self.config.verification.enable_checksum {
            Some(calculate_checksum(&records)?)
        } else {
            None
        };

        let batches = partition(records, self.config.changelog.batch_size)?;
        let mut generation = assemble(&self.collection, &self.author, input_count, batches)?;

        if let Some(checksum) = input_checksum {
            generation.output_checksum = Some(calculate_checksum(&generation.reconstructed)?);
            generation.input_checksum = Some(checksum);
        }

        Ok(generation)
    }

    /// Checks the generation and writes both outputs
    ///
    /// With `application.dry_run` nothing is written. A count mismatch is a
    /// warning unless `verification.fail_on_mismatch` is set, in which case
    /// it aborts before any file is touched.
    pub fn commit(&self, generation: &Generation, started: Instant) -> Result<GenerationReport> {
        let input_count = generation.input_count;
        let output_count = generation.output_count();

        if !generation.counts_match() {
            tracing::warn!(input_count, output_count, "Reconstructed document count differs from input");
            if self.config.verification.fail_on_mismatch {
                return Err(SeedlogError::CountMismatch {
                    input: input_count,
                    output: output_count,
                });
            }
        }

        let changelog_path = self.changelog_path();
        let verify_path = self.verify_path();
        let written = !self.config.application.dry_run;

        if written {
            // both destinations must be usable before the changelog is replaced
            ensure_parent_dir(&changelog_path)?;
            ensure_parent_dir(&verify_path)?;
            write_changelog(&changelog_path, &generation.changelog)?;
            write_reconstructed(&verify_path, &generation.reconstructed)?;
        } else {
            tracing::info!("Dry run enabled, skipping file writes");
        }

        let duration = started.elapsed();
        log_generation_complete!(output_count, duration);

        Ok(GenerationReport {
            generated_at: Utc::now(),
            input_count,
            output_count,
            changeset_ids: generation
                .changeset_ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
            batch_sizes: generation.batch_sizes.clone(),
            input_checksum: generation.input_checksum.clone(),
            output_checksum: generation.output_checksum.clone(),
            changelog_path,
            verify_path,
            written,
            duration,
        })
    }

    /// Reads, generates and commits in one call
    pub fn run(&self) -> Result<GenerationReport> {
        let started = Instant::now();
        let records = self.read_input()?;
        let generation = self.generate(records)?;
        self.commit(&generation, started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(batch_size: usize) -> SeedlogConfig {
        let mut config = SeedlogConfig::default();
        config.changelog.batch_size = batch_size;
        config
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| json!({ "id": i, "name": format!("doc {i}") })).collect()
    }

    #[test]
    fn test_generator_rejects_invalid_config() {
        assert!(matches!(
            Generator::new(config(0)),
            Err(SeedlogError::Configuration(_))
        ));
    }

    #[test]
    fn test_generate_counts_and_changesets() {
        let generator = Generator::new(config(100)).unwrap();
        let generation = generator.generate(records(250)).unwrap();

        assert_eq!(generation.input_count, 250);
        assert_eq!(generation.output_count(), 250);
        assert_eq!(generation.batch_sizes, vec![100, 100, 50]);
        assert_eq!(generation.changeset_ids.len(), 3);
        assert_eq!(generation.changeset_ids[2].as_str(), "import-subjects-batch-3");
        assert_eq!(generation.input_checksum, generation.output_checksum);
    }

    #[test]
    fn test_generate_preserves_order() {
        let input = records(17);
        let generator = Generator::new(config(4)).unwrap();
        let generation = generator.generate(input.clone()).unwrap();
        assert_eq!(generation.reconstructed, input);
    }

    #[test]
    fn test_generate_without_checksum() {
        let mut config = config(10);
        config.verification.enable_checksum = false;
        let generation = Generator::new(config).unwrap().generate(records(3)).unwrap();
        assert!(generation.input_checksum.is_none());
        assert!(generation.output_checksum.is_none());
    }

    #[test]
    fn test_assemble_detects_dropped_record() {
        let collection = CollectionName::new("subjects").unwrap();
        let author = AuthorId::new("seedlog").unwrap();
        let mut batches = partition(records(10), 4).unwrap();
        batches[1].records.pop();

        let generation = assemble(&collection, &author, 10, batches).unwrap();

        assert_eq!(generation.output_count(), 9);
        assert!(!generation.counts_match());
    }

    #[test]
    fn test_commit_blocks_on_mismatch_when_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = config(4);
        config.changelog.output_path = dir.path().join("out.yaml").display().to_string();
        config.verification.verify_dir = dir.path().join("temp").display().to_string();
        config.verification.fail_on_mismatch = true;
        let generator = Generator::new(config).unwrap();

        let mut generation = generator.generate(records(8)).unwrap();
        generation.reconstructed.pop();

        let err = generator.commit(&generation, Instant::now()).unwrap_err();
        assert!(matches!(
            err,
            SeedlogError::CountMismatch {
                input: 8,
                output: 7
            }
        ));
        assert!(!generator.changelog_path().exists());
        assert!(!generator.verify_path().exists());
    }

    #[test]
    fn test_commit_checks_verify_dir_before_writing_changelog() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = config(4);
        config.changelog.output_path = dir.path().join("out.yaml").display().to_string();
        let blocker = dir.path().join("temp");
        std::fs::write(&blocker, "plain file").unwrap();
        config.verification.verify_dir = blocker.display().to_string();
        let generator = Generator::new(config).unwrap();

        let generation = generator.generate(records(5)).unwrap();
        let err = generator.commit(&generation, Instant::now()).unwrap_err();

        assert!(matches!(err, SeedlogError::Io(_)));
        assert!(!generator.changelog_path().exists());
    }
}
