//! Structured display message produced by the services.
//!
//! `Embed` mirrors the subset of a Discord embed the bot uses. Services return it
//! instead of Serenity's `CreateEmbed` so rendering stays a pure, comparable value;
//! the bot layer converts it with `CreateEmbed::from` right before responding.

use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

/// Accent colours used across the bot's embeds.
pub mod colour {
    /// Help index and topic embeds.
    pub const MAGENTA: u32 = 0xE91E63;
    /// Status, info and credits embeds.
    pub const BLUE: u32 = 0x3498DB;
    /// Kick results.
    pub const YELLOW: u32 = 0xFEE75C;
    /// Ban results.
    pub const RED: u32 = 0xE74C3C;
    /// Unban results.
    pub const GREEN: u32 = 0x2ECC71;
}

/// Header line shown above an embed's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

/// A named section of an embed.
///
/// `inline` is a rendering hint: inline fields may share a row, block fields
/// always take a full row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A complete display message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub colour: u32,
    pub author: Option<EmbedAuthor>,
    pub thumbnail: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    /// Creates an embed with a title and accent colour and nothing else.
    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            colour,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            icon_url,
        });
        self
    }

    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }

    /// Appends a field. Fields render in the order they are added.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

impl From<Embed> for CreateEmbed {
    fn from(embed: Embed) -> Self {
        let mut create = CreateEmbed::new()
            .title(embed.title)
            .colour(Colour::new(embed.colour));

        if let Some(description) = embed.description {
            create = create.description(description);
        }

        if let Some(author) = embed.author {
            let mut header = CreateEmbedAuthor::new(author.name);
            if let Some(icon_url) = author.icon_url {
                header = header.icon_url(icon_url);
            }
            create = create.author(header);
        }

        if let Some(thumbnail) = embed.thumbnail {
            create = create.thumbnail(thumbnail);
        }

        for field in embed.fields {
            create = create.field(field.name, field.value, field.inline);
        }

        if let Some(footer) = embed.footer {
            create = create.footer(CreateEmbedFooter::new(footer));
        }

        create
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_insertion_order() {
        let embed = Embed::new("Title", colour::BLUE)
            .field("first", "1", true)
            .field("second", "2", false)
            .field("third", "", false);

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(embed.fields[0].inline);
        assert!(!embed.fields[1].inline);
    }

    #[test]
    fn converts_into_serenity_embed() {
        let embed = Embed::new("Status", colour::BLUE)
            .description("desc")
            .author("Sushi Bot", Some("https://example.com/icon.png".to_string()))
            .field("Servers", "3", true)
            .footer("Bot is hosted.");

        let value = serde_json::to_value(CreateEmbed::from(embed)).unwrap();

        assert_eq!(value["title"], "Status");
        assert_eq!(value["description"], "desc");
        assert_eq!(value["color"], colour::BLUE);
        assert_eq!(value["author"]["name"], "Sushi Bot");
        assert_eq!(value["author"]["icon_url"], "https://example.com/icon.png");
        assert_eq!(value["fields"][0]["name"], "Servers");
        assert_eq!(value["fields"][0]["inline"], true);
        assert_eq!(value["footer"]["text"], "Bot is hosted.");
    }
}
