//! Generate command implementation
//!
//! Runs the generator step by step so progress can be printed between the
//! read, build and write phases.

use crate::config::{InputMode, SeedlogConfig};
use crate::core::generate::Generator;
use clap::Args;
use std::str::FromStr;
use std::time::Instant;

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Override the source JSON file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the target collection name
    #[arg(long)]
    pub collection: Option<String>,

    /// Override the changelog output path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the directory of the reconstructed file
    #[arg(long)]
    pub verify_dir: Option<String>,

    /// Override the file name of the reconstructed file
    #[arg(long)]
    pub verify_file: Option<String>,

    /// Override the maximum documents per changeset
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override the changeset author
    #[arg(long)]
    pub author: Option<String>,

    /// Override the input mode (tolerant, strict or legacy)
    #[arg(long)]
    pub mode: Option<String>,

    /// Refuse to write output when the counts differ
    #[arg(long)]
    pub fail_on_mismatch: bool,

    /// Build everything but write no files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Applies the command-line overrides to `config`
    pub fn apply_overrides(&self, config: &mut SeedlogConfig) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.input.path = input.clone();
        }
        if let Some(mode) = &self.mode {
            config.input.mode = InputMode::from_str(mode)?;
        }
        if let Some(collection) = &self.collection {
            config.changelog.collection_name = collection.clone();
        }
        if let Some(output) = &self.output {
            config.changelog.output_path = output.clone();
        }
        if let Some(author) = &self.author {
            config.changelog.author_id = author.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.changelog.batch_size = batch_size;
        }
        if let Some(verify_dir) = &self.verify_dir {
            config.verification.verify_dir = verify_dir.clone();
        }
        if let Some(verify_file) = &self.verify_file {
            config.verification.verify_file = Some(verify_file.clone());
        }
        if self.fail_on_mismatch {
            config.verification.fail_on_mismatch = true;
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        Ok(())
    }

    /// Execute the generate command
    ///
    /// Fatal errors are returned to the caller; a count mismatch is reported
    /// and still exits successfully.
    pub fn execute(&self, mut config: SeedlogConfig) -> anyhow::Result<i32> {
        let started = Instant::now();
        self.apply_overrides(&mut config)?;

        let generator = Generator::new(config)?;
        let config = generator.config();

        if config.application.dry_run {
            println!("🔍 DRY RUN - no se escribirá ningún archivo");
        }

        println!("📖 Leyendo {}...", config.input.path);
        let records = generator.read_input()?;
        println!("✅ Registros leídos en origen: {}", records.len());

        println!(
            "⚙️  Generando YAML en {}...",
            generator.changelog_path().display()
        );
        let generation = generator.generate(records)?;

        if !config.application.dry_run {
            println!(
                "💾 Creando archivo de control en {}...",
                generator.verify_path().display()
            );
        }
        let report = generator.commit(&generation, started)?;

        println!("{}", report.format_summary());
        Ok(0)
    }
}
