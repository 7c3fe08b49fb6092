//! Data verification
//!
//! Checksums and a re-read of generated files, used by the generator's
//! integrity check and by the `verify` command.

pub mod checksum;
pub mod report;
pub mod verify;

pub use checksum::calculate_checksum;
pub use report::VerificationReport;
pub use verify::{read_changelog, verify_files, ChangelogContents};
