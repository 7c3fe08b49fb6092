//! Verify command implementation
//!
//! Re-reads the source, the reconstructed file and the changelog of a
//! previous run and compares them.

use crate::config::SeedlogConfig;
use crate::core::verification::verify_files;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Args, Debug, Default)]
pub struct VerifyArgs {
    /// Override the source JSON file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the reconstructed file to compare against
    #[arg(short, long)]
    pub reconstructed: Option<String>,

    /// Override the changelog to compare against
    #[arg(long)]
    pub changelog: Option<String>,

    /// Only compare the source with the reconstructed file
    #[arg(long)]
    pub skip_changelog: bool,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self, config: SeedlogConfig) -> anyhow::Result<i32> {
        let source = PathBuf::from(self.input.as_ref().unwrap_or(&config.input.path));
        let reconstructed = self
            .reconstructed
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| config.verify_path());
        let changelog = if self.skip_changelog {
            None
        } else {
            Some(PathBuf::from(
                self.changelog
                    .as_ref()
                    .unwrap_or(&config.changelog.output_path),
            ))
        };

        tracing::info!(
            source = %source.display(),
            reconstructed = %reconstructed.display(),
            "Starting verification"
        );
        println!("🔍 Verificando {}...", source.display());

        let report = verify_files(
            &source,
            &reconstructed,
            changelog.as_deref(),
            config.input.mode,
        )?;

        println!();
        println!("{}", report.format_summary());

        Ok(if report.is_success() { 0 } else { 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_verify_detects_difference() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.json");
        let reconstructed = dir.path().join("reconstructed.json");
        fs::write(&source, r#"[{"n":1},{"n":2}]"#).unwrap();
        fs::write(&reconstructed, r#"[{"n":1}]"#).unwrap();

        let args = VerifyArgs {
            input: Some(source.display().to_string()),
            reconstructed: Some(reconstructed.display().to_string()),
            skip_changelog: true,
            ..VerifyArgs::default()
        };

        assert_eq!(args.execute(SeedlogConfig::default()).unwrap(), 1);
    }

    #[test]
    fn test_verify_missing_reconstructed_is_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.json");
        fs::write(&source, "[]").unwrap();

        let args = VerifyArgs {
            input: Some(source.display().to_string()),
            reconstructed: Some(dir.path().join("nope.json").display().to_string()),
            skip_changelog: true,
            ..VerifyArgs::default()
        };

        assert!(args.execute(SeedlogConfig::default()).is_err());
    }
}
