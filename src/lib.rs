// Seedlog - JSON to Liquibase insertMany changelog generator
// Copyright (c) 2025 Seedlog Contributors
// Licensed under the MIT License

//! # Seedlog - JSON seed data to Liquibase changelogs
//!
//! Seedlog turns a JSON export of documents into a Liquibase changelog
//! (YAML) made of batched `insertMany` changesets, and writes a reconstructed
//! copy of the batched data so a human can audit the result.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Reading, batching, rendering, writing and verification
//! - [`domain`] - Identifiers, errors and the result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seedlog::config::SeedlogConfig;
//! use seedlog::core::generate::Generator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = SeedlogConfig::default();
//! config.input.path = "merged_subjects.json".to_string();
//! config.changelog.collection_name = "subjects".to_string();
//!
//! let report = Generator::new(config)?.run()?;
//! println!("{}", report.format_summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Changelog Layout
//!
//! ```yaml
//! databaseChangeLog:
//!   - changeSet:
//!       id: import-subjects-batch-1
//!       author: seedlog
//!       changes:
//!         - insertMany:
//!             collectionName: subjects
//!             documents: >-
//!               [{"nombre":"Cálculo I"}]
//! ```
//!
//! Every non-ASCII character in the payload is escaped so the changelog is a
//! pure 7-bit file; the reconstructed audit file keeps them literal.
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], whose error type is
//! [`domain::SeedlogError`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
