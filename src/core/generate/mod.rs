//! Changelog generation
//!
//! - [`coordinator`] - The [`Generator`] and the in-memory [`Generation`]
//! - [`summary`] - The [`GenerationReport`] printed at the end of a run
//! - [`writer`] - Atomic writers for the changelog and the reconstructed file

pub mod coordinator;
pub mod summary;
pub mod writer;

pub use coordinator::{assemble, Generation, Generator};
pub use summary::GenerationReport;
pub use writer::{ensure_parent_dir, write_atomic, write_changelog, write_reconstructed};
