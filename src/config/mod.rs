//! Configuration management for Seedlog.
//!
//! # Overview
//!
//! Seedlog reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SEEDLOG_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation before any file is touched
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`InputConfig`] - Source file path and [`InputMode`]
//! - [`ChangelogConfig`] - Output path, collection, author, batch size
//! - [`VerificationConfig`] - Reconstructed file location and integrity checks
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [input]
//! path = "merged_subjects.json"
//! mode = "tolerant"
//!
//! [changelog]
//! output_path = "009_migration_data_subjects.yaml"
//! collection_name = "subjects"
//! author_id = "${SEEDLOG_AUTHOR}"
//! batch_size = 100
//!
//! [verification]
//! verify_dir = "temp"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default};
pub use schema::{
    ApplicationConfig, ChangelogConfig, InputConfig, InputMode, LoggingConfig, SeedlogConfig,
    VerificationConfig,
};
