//! Fuzzing library for ursid-wiki.
//!
//! This crate provides fuzzing targets for the wikitext row parser and the
//! MediaWiki response models.
//!
//! # Usage
//!
//! ```bash
//! cd crates/ursid-fuzz
//! cargo +nightly fuzz run fuzz_row_parse -- -max_total_time=60
//! ```

pub use ursid_wiki::models;
pub use ursid_wiki::services::extract;
