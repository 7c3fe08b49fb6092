//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "seedlog.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Creando configuración de Seedlog");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ El archivo de configuración ya existe: {}", self.output);
            println!("   Use --force para sobrescribirlo");
            return Ok(1);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(()) => {
                println!("✅ Archivo de configuración creado: {}", self.output);
                println!();
                println!("Siguientes pasos:");
                println!("  1. Edite {} con sus rutas y colección", self.output);
                println!(
                    "  2. Valide la configuración: seedlog --config {} validate-config",
                    self.output
                );
                println!("  3. Genere el changelog: seedlog --config {} generate", self.output);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write configuration");
                println!("❌ No se pudo escribir el archivo de configuración");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }

    /// Sample configuration with every option at its default
    fn sample_config() -> &'static str {
        r#"# Seedlog Configuration File
# JSON to Liquibase insertMany changelog generator
#
# Values of the form ${VAR} are replaced from the environment, and any key
# can be overridden with SEEDLOG_<SECTION>_<KEY> (e.g. SEEDLOG_CHANGELOG_BATCH_SIZE).

[application]
log_level = "info"
dry_run = false

[input]
path = "merged_subjects.json"
# tolerant: JSON array, or objects separated by optional commas
# strict:   JSON array only
# legacy:   bracket wrap with a comma after every '}'
mode = "tolerant"

[changelog]
output_path = "009_migration_data_subjects.yaml"
collection_name = "subjects"
author_id = "seedlog"
batch_size = 100

[verification]
verify_dir = "temp"
# verify_file = "subjects_reconstructed.json"
enable_checksum = true
fail_on_mismatch = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedlogConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: SeedlogConfig = toml::from_str(InitArgs::sample_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.changelog.batch_size, 100);
        assert_eq!(config.changelog.collection_name, "subjects");
        assert!(config.verification.verify_file.is_none());
    }

    #[test]
    fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("seedlog.toml");
        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);
        assert!(output.exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("seedlog.toml");
        fs::write(&output, "# mine").unwrap();

        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# mine");

        let args = InitArgs {
            output: output.display().to_string(),
            force: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }
}
