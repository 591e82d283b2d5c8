//! Display identity used in embed author headers.

use serenity::all::{Guild, User};

/// Name and icon identifying who an embed is "from".
///
/// The bot layer resolves branding from the invocation context and passes it
/// into the services explicitly; services never look it up themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branding {
    pub name: String,
    pub icon_url: Option<String>,
}

impl Branding {
    pub fn new(name: impl Into<String>, icon_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            icon_url,
        }
    }

    /// Branding of the server a command was invoked in.
    pub fn from_guild(guild: &Guild) -> Self {
        Self::new(guild.name.clone(), guild.icon_url())
    }

    /// Branding of the bot account itself.
    pub fn from_bot_user(user: &User) -> Self {
        Self::new(user.name.clone(), user.avatar_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{guild::create_test_guild, user::create_test_bot_user};

    #[test]
    fn guild_branding_uses_name_and_icon() {
        let guild = create_test_guild(123456789, "Sushi Lounge", Some("abc123"));

        let branding = Branding::from_guild(&guild);

        assert_eq!(branding.name, "Sushi Lounge");
        let icon_url = branding.icon_url.unwrap();
        assert!(icon_url.contains("123456789"));
        assert!(icon_url.contains("abc123"));
    }

    #[test]
    fn guild_without_icon_has_no_icon_url() {
        let guild = create_test_guild(123456789, "Sushi Lounge", None);

        assert_eq!(Branding::from_guild(&guild).icon_url, None);
    }

    #[test]
    fn bot_branding_uses_name_and_avatar() {
        let user = create_test_bot_user(555, "Sushi Bot", "def456");

        let branding = Branding::from_bot_user(&user);

        assert_eq!(branding.name, "Sushi Bot");
        assert!(branding.icon_url.unwrap().contains("def456"));
    }
}
