//! Changelog construction
//!
//! - [`batch`] - Partitioning of the input into fixed-size batches
//! - [`changeset`] - One `insertMany` changeset per batch and the YAML layout
//! - [`ascii`] - JSON serialization restricted to 7-bit output

pub mod ascii;
pub mod batch;
pub mod changeset;

pub use ascii::{to_ascii_json, AsciiFormatter};
pub use batch::{partition, Batch};
pub use changeset::{render_changelog, ChangeSet, CHANGELOG_HEADER};
