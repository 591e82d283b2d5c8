//! Test fixtures providing reusable test data without touching the filesystem.
//!
//! This module contains fixture functions that create in-memory JSON command records
//! for use in unit tests and as inputs to `MetadataDirBuilder`. Fixtures produce the
//! exact shape of the files in `data/commands`, so tests exercise the real parser.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Default record
//! let record = fixture::command_record::json();
//!
//! // Record with custom fields
//! let kick = fixture::command_record::json_builder()
//!     .title("Kick")
//!     .field("Format", "`/kick <user> [reason] [discrete]`")
//!     .build();
//! ```

pub mod command_record;
