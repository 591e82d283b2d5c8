//! Sushibot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the bot. This crate offers
//! a builder pattern for creating test contexts backed by temporary command data directories,
//! JSON fixtures for command help records, and factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **MetadataDirBuilder**: Fluent builder for populating a temporary record directory
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory JSON command records
//! - **serenity**: Serenity `Guild`, `User` and `PartialMember` factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::MetadataDirBuilder, fixture};
//!
//! #[test]
//! fn loads_ping() -> Result<(), TestError> {
//!     let test = MetadataDirBuilder::new()
//!         .with_record("ping", fixture::command_record::json())
//!         .build()?;
//!
//!     let store = CommandMetadataStore::load(test.path()).unwrap();
//!     // Assert on the loaded store...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
