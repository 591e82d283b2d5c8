//! Moderation actions and the user data shown in their result embeds.

use serenity::all::{PartialMember, User};

use crate::model::embed::colour;

/// A moderation action performed against a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick,
    Ban,
    Unban,
}

impl ModerationAction {
    /// Slash command name that performs this action.
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Unban => "unban",
        }
    }

    /// Author header line of the result embed.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Kick => "Member kicked",
            Self::Ban => "Member banned",
            Self::Unban => "Member unbanned",
        }
    }

    pub fn colour(self) -> u32 {
        match self {
            Self::Kick => colour::YELLOW,
            Self::Ban => colour::RED,
            Self::Unban => colour::GREEN,
        }
    }

    /// Resolves the action performed by a slash command name.
    pub fn from_command_name(name: &str) -> Option<Self> {
        match name {
            "kick" => Some(Self::Kick),
            "ban" => Some(Self::Ban),
            "unban" => Some(Self::Unban),
            _ => None,
        }
    }
}

/// Snapshot of the user a moderation action concerns.
///
/// Timestamps are Unix seconds. `joined_at` is only known when the user was
/// resolved as a member of the guild, which is never the case for unbans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationTarget {
    pub user_id: u64,
    pub tag: String,
    pub avatar_url: Option<String>,
    pub created_at: i64,
    pub joined_at: Option<i64>,
    pub bot: bool,
    pub system: bool,
}

impl ModerationTarget {
    /// Builds a target from a resolved user option and its optional member data.
    pub fn from_user(user: &User, member: Option<&PartialMember>) -> Self {
        Self {
            user_id: user.id.get(),
            tag: user.tag(),
            avatar_url: user.avatar_url(),
            created_at: user.created_at().unix_timestamp(),
            joined_at: member
                .and_then(|m| m.joined_at)
                .map(|joined| joined.unix_timestamp()),
            bot: user.bot,
            system: user.system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{member::create_test_partial_member, user::create_test_user};

    #[test]
    fn command_names_round_trip() {
        for action in [
            ModerationAction::Kick,
            ModerationAction::Ban,
            ModerationAction::Unban,
        ] {
            assert_eq!(
                ModerationAction::from_command_name(action.command_name()),
                Some(action)
            );
        }
        assert_eq!(ModerationAction::from_command_name("ping"), None);
    }

    #[test]
    fn target_from_member_has_join_time() {
        let user = create_test_user(175928847299117063, "sushi", Some("1234"));
        let member = create_test_partial_member("2021-03-04T05:06:07.000000+00:00");

        let target = ModerationTarget::from_user(&user, Some(&member));

        assert_eq!(target.user_id, 175928847299117063);
        assert_eq!(target.tag, "sushi#1234");
        assert_eq!(target.joined_at, Some(1614834367));
        // Snowflake timestamp: (id >> 22) + Discord epoch
        assert_eq!(target.created_at, 1462015105);
        assert!(!target.bot);
        assert!(!target.system);
    }

    #[test]
    fn target_without_member_has_no_join_time() {
        let user = create_test_user(175928847299117063, "sushi", None);

        let target = ModerationTarget::from_user(&user, None);

        assert_eq!(target.tag, "sushi");
        assert_eq!(target.joined_at, None);
    }
}
