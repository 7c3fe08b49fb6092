//! Domain types for Seedlog.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated identifiers** ([`CollectionName`], [`AuthorId`], [`ChangeSetId`])
//! - **Error types** ([`SeedlogError`])
//! - **Result type alias** ([`Result`])
//! - The [`Record`] alias for an opaque input document
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T>`](Result):
//!
//! ```rust,no_run
//! use seedlog::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = seedlog::config::load_config("seedlog.toml")?;
//!     println!("{}", config.changelog.collection_name);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::SeedlogError;
pub use ids::{AuthorId, ChangeSetId, CollectionName};
pub use result::Result;

/// One input document. Its fields are never inspected.
pub type Record = serde_json::Value;
