//! Static `/info` and `/credits` embeds.

use crate::model::{
    branding::Branding,
    embed::{colour, Embed},
};

const REPOSITORY_URL: &str = "https://github.com/MirageAegis/Sushi-Bot";
const TERMS_OF_SERVICE_URL: &str = "https://github.com/MirageAegis/Sushi-Bot/wiki/Terms-of-Service";
const PRIVACY_POLICY_URL: &str = "https://github.com/MirageAegis/Sushi-Bot/wiki/Privacy-Policy";

/// Builds the `/info` embed with links to the repository and policies.
pub fn build_info_embed(bot: &Branding) -> Embed {
    Embed::new("Information", colour::BLUE)
        .description("Here are three useful links with information about the bot")
        .author(&bot.name, bot.icon_url.clone())
        .field(
            "Repository",
            format!(
                "Follow this [link]({}) to the bot's repository to see its source code and wiki pages",
                REPOSITORY_URL
            ),
            true,
        )
        .field(
            "Terms of Service",
            format!(
                "The bot's Terms of Service can be found [here]({})\n\
                 By using {}, you agree to the ToS",
                TERMS_OF_SERVICE_URL, bot.name
            ),
            true,
        )
        .field(
            "Privacy Policy",
            format!(
                "The bot's Privacy Policy can be found [here]({})\n\
                 Find out what kind of data the bot collects and how it's being used",
                PRIVACY_POLICY_URL
            ),
            true,
        )
}

/// Builds the `/credits` embed.
pub fn build_credits_embed(bot: &Branding) -> Embed {
    Embed::new("Credits", colour::BLUE)
        .description(format!("Here are the people who have worked on {}!", bot.name))
        .author(&bot.name, bot.icon_url.clone())
        .field(
            "Lead Developer and Programmer",
            "Mirage Aegis (<@123456133368119296>)",
            false,
        )
        .field("Lead Artist", "Chade (<@283653964816187392>)", false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> Branding {
        Branding::new("Sushi Bot", None)
    }

    #[test]
    fn info_links_repository_and_policies() {
        let embed = build_info_embed(&bot());

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Repository", "Terms of Service", "Privacy Policy"]);
        assert!(embed.fields[0].value.contains(REPOSITORY_URL));
        assert!(embed.fields[1].value.contains(TERMS_OF_SERVICE_URL));
        assert!(embed.fields[2].value.contains(PRIVACY_POLICY_URL));
    }

    #[test]
    fn credits_lists_contributors() {
        let embed = build_credits_embed(&bot());

        assert_eq!(embed.title, "Credits");
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(
            embed.description.as_deref(),
            Some("Here are the people who have worked on Sushi Bot!")
        );
    }
}
