//! Validate config command implementation

use crate::config::SeedlogConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// The configuration has already been loaded (and validated) by the
    /// caller; this prints what will be used.
    pub fn execute(&self, config_path: Option<&str>, config: SeedlogConfig) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("(valores por defecto)");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validando configuración: {source}");
        println!();

        match config.validate() {
            Ok(()) => {
                println!("✅ La configuración es válida");
                println!();
                println!("{}", Self::summary(&config));
                Ok(0)
            }
            Err(e) => {
                println!("❌ La validación de la configuración falló");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }

    fn summary(config: &SeedlogConfig) -> String {
        let mut out = String::from("Resumen de configuración:\n");
        out.push_str(&format!("  Log Level: {}\n", config.application.log_level));
        out.push_str(&format!("  Dry Run: {}\n", config.application.dry_run));
        out.push_str(&format!("  Entrada: {}\n", config.input.path));
        out.push_str(&format!("  Modo de entrada: {}\n", config.input.mode));
        out.push_str(&format!("  Changelog: {}\n", config.changelog.output_path));
        out.push_str(&format!("  Colección: {}\n", config.changelog.collection_name));
        out.push_str(&format!("  Autor: {}\n", config.changelog.author_id));
        out.push_str(&format!("  Batch Size: {}\n", config.changelog.batch_size));
        out.push_str(&format!(
            "  Archivo de control: {}\n",
            config.verify_path().display()
        ));
        out.push_str(&format!(
            "  Checksum: {}\n",
            config.verification.enable_checksum
        ));
        out.push_str(&format!(
            "  Bloquear si hay diferencias: {}",
            config.verification.fail_on_mismatch
        ));
        out
    }
}
