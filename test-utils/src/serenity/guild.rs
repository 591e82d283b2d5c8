//! Test factory for creating Serenity Guild objects.

use serenity::all::Guild;

use super::pad_image_hash;

/// Creates a test Serenity Guild with customizable branding.
///
/// Only the id, name and icon matter to the bot; every other field is set to a
/// neutral default that satisfies Serenity's deserializer.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (padded to Discord's hash length if shorter)
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    let icon = icon_hash.map(pad_image_hash);

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-11-08T00:00:00.000000+00:00",
        "large": false,
        "member_count": 10,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
