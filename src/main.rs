// Seedlog - JSON to Liquibase insertMany changelog generator
// Copyright (c) 2025 Seedlog Contributors
// Licensed under the MIT License

use clap::Parser;
use seedlog::cli::{Cli, Commands};
use seedlog::config::{load_or_default, LoggingConfig, SeedlogConfig};
use seedlog::log_error_with_context;
use seedlog::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // `init` writes the configuration file, everything else reads it
    let config = match &cli.command {
        Commands::Init(_) => None,
        _ => match load_or_default(cli.config.as_deref()) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(LoggingConfig::default);

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Seedlog starting");

    match execute_command(&cli, config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log_error_with_context!(&e, "Command execution failed");
            println!("\n❌ Error fatal durante el proceso: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: Option<SeedlogConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Init(args) => args.execute(),
        Commands::Generate(args) => args.execute(required(config)?),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref(), required(config)?),
        Commands::Verify(args) => args.execute(required(config)?),
    }
}

fn required(config: Option<SeedlogConfig>) -> anyhow::Result<SeedlogConfig> {
    config.ok_or_else(|| anyhow::anyhow!("configuration was not loaded"))
}
