//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake); also determines the account creation time
/// - `username` - Account username
/// - `discriminator` - Legacy four digit discriminator, or `None` for migrated usernames
///
/// # Returns
/// - `User` - A regular (non-bot, non-system) user without an avatar
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, discriminator: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": discriminator.unwrap_or("0"),
        "global_name": null,
        "avatar": null,
        "bot": false,
        "system": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test bot User with an avatar.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Bot username
/// - `avatar_hash` - Avatar hash (padded to Discord's hash length if shorter)
pub fn create_test_bot_user(user_id: u64, username: &str, avatar_hash: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": super::pad_image_hash(avatar_hash),
        "bot": true,
        "system": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test bot user - invalid JSON structure")
}
