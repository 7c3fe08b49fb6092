//! CLI command implementations

pub mod generate;
pub mod init;
pub mod validate;
pub mod verify;
