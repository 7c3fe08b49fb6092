//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Seedlog - JSON to Liquibase insertMany changelog generator
#[derive(Parser, Debug)]
#[command(name = "seedlog")]
#[command(version, about, long_about = None)]
#[command(author = "Seedlog Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "SEEDLOG_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SEEDLOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the changelog and the reconstructed audit file
    Generate(commands::generate::GenerateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Compare the source with the files a previous run produced
    Verify(commands::verify::VerifyArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
