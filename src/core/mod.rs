//! Core logic for Seedlog.
//!
//! # Modules
//!
//! - [`input`] - Source file reading, BOM handling and non-array input
//! - [`changelog`] - Batching, changeset rendering, ASCII-only JSON
//! - [`generate`] - The generator run, output writers and the report
//! - [`verification`] - Checksums and re-reading of generated files
//!
//! # Workflow
//!
//! 1. **Read**: Load the source into an ordered list of documents
//! 2. **Partition**: Cut it into batches of `batch_size`
//! 3. **Render**: One `insertMany` changeset per batch
//! 4. **Reassemble**: Concatenate the batches again
//! 5. **Check**: Compare counts (and digests) before writing
//! 6. **Write**: Changelog and reconstructed audit file
//!
//! # Example
//!
//! ```rust,no_run
//! use seedlog::config::load_config;
//! use seedlog::core::generate::Generator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("seedlog.toml")?;
//! let report = Generator::new(config)?.run()?;
//!
//! println!("{}", report.format_summary());
//! # Ok(())
//! # }
//! ```

pub mod changelog;
pub mod generate;
pub mod input;
pub mod verification;
