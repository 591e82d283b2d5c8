//! Test factory for creating Serenity PartialMember objects.
//!
//! Slash command user options resolve to a `User` plus an optional
//! `PartialMember` carrying guild-specific data such as the join time.

use serenity::all::PartialMember;

/// Creates a test PartialMember that joined the guild at `joined_at`.
///
/// # Arguments
/// - `joined_at` - RFC 3339 timestamp of when the member joined
///
/// # Returns
/// - `PartialMember` - Member without nickname or roles
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
pub fn create_test_partial_member(joined_at: &str) -> PartialMember {
    serde_json::from_value(serde_json::json!({
        "nick": null,
        "roles": [],
        "joined_at": joined_at,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "pending": false,
        "flags": 0,
        "permissions": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
