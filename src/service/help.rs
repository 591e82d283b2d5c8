//! Help renderer producing the `/help` embed.
//!
//! Rendering is a pure function of the requested topic, the loaded metadata store,
//! the registry and the caller-supplied branding. It performs no Discord calls and
//! no I/O, so the same inputs always produce an identical embed.

use crate::{
    error::command::HelpError,
    model::{
        branding::Branding,
        embed::{colour, Embed},
    },
    service::{metadata::CommandMetadataStore, registry::CommandRegistry},
};

/// Author header line of every help embed.
const HELP_AUTHOR: &str = "Help";

/// Title of the general command index.
const INDEX_TITLE: &str = "General help";

/// Separator placed between command names in an index section.
const INDEX_SEPARATOR: &str = ", ";

/// Introduction to the notation used in command formats.
const INDEX_DESCRIPTION: &str = "These are the commands offered by Sushi Bot. \
Some commands have certain notations that mean different things.\n\
Parameters without any notation are required.\n\
[parameters] denoted like this are optional.\n\
<values> denoted like this indicate that you should replace the angled brackets with a value.\n\
Use `/help topic:<topic>` to get help for a specific command!";

pub struct HelpRenderer<'a> {
    store: &'a CommandMetadataStore,
    registry: &'a CommandRegistry,
}

impl<'a> HelpRenderer<'a> {
    pub fn new(store: &'a CommandMetadataStore, registry: &'a CommandRegistry) -> Self {
        Self { store, registry }
    }

    /// Renders the help embed for an optional topic.
    ///
    /// Without a topic the general index is rendered: the notation introduction followed
    /// by one block field per registry category listing its commands in declared order.
    /// The metadata store is not consulted in that case.
    ///
    /// With a topic the topic's record supplies the title and description, followed by
    /// one block field per record field in record order. Fields are emitted as-is, even
    /// when a value is empty.
    ///
    /// Both variants carry a "Help" author header with the server's icon from `branding`.
    ///
    /// # Arguments
    /// - `topic` - Command name to describe, or `None` for the index
    /// - `branding` - Branding of the server the command was invoked in
    ///
    /// # Returns
    /// - `Ok(Embed)` - The rendered help message
    /// - `Err(HelpError::TopicNotFound)` - `topic` has no loaded record
    pub fn render(&self, topic: Option<&str>, branding: &Branding) -> Result<Embed, HelpError> {
        match topic {
            Some(topic) => self.render_topic(topic, branding),
            None => Ok(self.render_index(branding)),
        }
    }

    fn render_index(&self, branding: &Branding) -> Embed {
        self.registry.categories().iter().fold(
            Embed::new(INDEX_TITLE, colour::MAGENTA)
                .description(INDEX_DESCRIPTION)
                .author(HELP_AUTHOR, branding.icon_url.clone()),
            |embed, category| {
                let names = category
                    .commands
                    .iter()
                    .map(|name| format_command_name(name))
                    .collect::<Vec<_>>()
                    .join(INDEX_SEPARATOR);

                embed.field(&category.label, names, false)
            },
        )
    }

    fn render_topic(&self, topic: &str, branding: &Branding) -> Result<Embed, HelpError> {
        let record = self
            .store
            .get(topic)
            .map_err(|_| HelpError::TopicNotFound(topic.to_string()))?;

        Ok(record.fields.iter().fold(
            Embed::new(&record.title, colour::MAGENTA)
                .description(&record.description)
                .author(HELP_AUTHOR, branding.icon_url.clone()),
            |embed, field| embed.field(&field.name, &field.value, false),
        ))
    }
}

/// Formats a command name the way it is typed, e.g. `` `/ping` ``.
pub fn format_command_name(name: &str) -> String {
    format!("`/{}`", name)
}

#[cfg(test)]
mod test;
