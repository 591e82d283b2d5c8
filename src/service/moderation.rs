//! Result embeds for `/kick`, `/ban` and `/unban`.
//!
//! The Discord call itself happens in the bot layer; this module only describes the
//! outcome so it can be tested without a gateway connection.

use crate::model::{
    branding::Branding,
    embed::Embed,
    moderation::{ModerationAction, ModerationTarget},
};

/// Placeholder for values that are not available.
const NOT_AVAILABLE: &str = "N/A";

/// Builds the embed announcing a completed moderation action.
///
/// The author header names the action with the server's icon, the title is the
/// target's tag and the thumbnail is their avatar. The six detail fields are inline.
///
/// # Arguments
/// - `action` - The action that was performed
/// - `target` - The user it was performed on
/// - `reason` - Audit log reason given by the moderator, if any
/// - `server` - Branding of the server the action happened in
///
/// # Returns
/// - `Embed` - Result embed ready for conversion
pub fn build_moderation_embed(
    action: ModerationAction,
    target: &ModerationTarget,
    reason: Option<&str>,
    server: &Branding,
) -> Embed {
    let joined = target
        .joined_at
        .map(discord_timestamp)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Embed::new(&target.tag, action.colour())
        .author(action.headline(), server.icon_url.clone())
        .thumbnail(target.avatar_url.clone())
        .field("User ID", target.user_id.to_string(), true)
        .field("Created", discord_timestamp(target.created_at), true)
        .field("Joined", joined, true)
        .field("Reason", reason.unwrap_or(NOT_AVAILABLE), true)
        .field("Bot user", target.bot.to_string(), true)
        .field("System user", target.system.to_string(), true)
}

/// Formats a Unix timestamp as a Discord timestamp tag, rendered in each viewer's locale.
fn discord_timestamp(unix_seconds: i64) -> String {
    format!("<t:{}>", unix_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::embed::colour;

    fn target() -> ModerationTarget {
        ModerationTarget {
            user_id: 42,
            tag: "sushi#1234".to_string(),
            avatar_url: Some("https://cdn.example/avatar.png".to_string()),
            created_at: 1462015105,
            joined_at: Some(1614834367),
            bot: false,
            system: false,
        }
    }

    fn server() -> Branding {
        Branding::new("Sushi Lounge", Some("https://cdn.example/icon.png".to_string()))
    }

    #[test]
    fn kick_embed_is_yellow_with_details() {
        let embed =
            build_moderation_embed(ModerationAction::Kick, &target(), Some("spam"), &server());

        assert_eq!(embed.title, "sushi#1234");
        assert_eq!(embed.colour, colour::YELLOW);
        let author = embed.author.as_ref().unwrap();
        assert_eq!(author.name, "Member kicked");
        assert_eq!(author.icon_url.as_deref(), Some("https://cdn.example/icon.png"));
        assert_eq!(
            embed.thumbnail.as_deref(),
            Some("https://cdn.example/avatar.png")
        );

        let fields: Vec<(&str, &str)> = embed
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("User ID", "42"),
                ("Created", "<t:1462015105>"),
                ("Joined", "<t:1614834367>"),
                ("Reason", "spam"),
                ("Bot user", "false"),
                ("System user", "false"),
            ]
        );
        assert!(embed.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn ban_and_unban_use_their_own_headline_and_colour() {
        let ban = build_moderation_embed(ModerationAction::Ban, &target(), None, &server());
        let unban = build_moderation_embed(ModerationAction::Unban, &target(), None, &server());

        assert_eq!(ban.author.unwrap().name, "Member banned");
        assert_eq!(ban.colour, colour::RED);
        assert_eq!(unban.author.unwrap().name, "Member unbanned");
        assert_eq!(unban.colour, colour::GREEN);
    }

    #[test]
    fn missing_reason_and_join_show_not_available() {
        let mut target = target();
        target.joined_at = None;

        let embed = build_moderation_embed(ModerationAction::Unban, &target, None, &server());

        assert_eq!(embed.fields[2].value, "N/A");
        assert_eq!(embed.fields[3].value, "N/A");
    }
}
