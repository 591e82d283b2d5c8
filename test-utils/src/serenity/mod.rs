//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating Serenity structs (Guild, User,
//! PartialMember) for testing. The factories deserialize JSON shaped like Discord's API
//! payloads, so the objects are exactly what Serenity would hand the bot at runtime.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{guild::create_test_guild, user::create_test_user};
//!
//! #[test]
//! fn test_branding() {
//!     let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//!     let user = create_test_user(987654321, "sushi", Some("1234"));
//!     // ...
//! }
//! ```

pub mod guild;
pub mod member;
pub mod user;

/// Pads an image hash to Discord's hash format.
///
/// Static hashes are 32 characters; animated hashes are `a_` plus 32 characters.
/// Shorter inputs are right-padded with `0` so tests can use readable prefixes.
pub(crate) fn pad_image_hash(hash: &str) -> String {
    let target = if hash.starts_with("a_") { 34 } else { 32 };

    if hash.len() < target {
        format!("{:0<width$}", hash, width = target)
    } else {
        hash.to_string()
    }
}
