//! Static grouping of commands into help categories.
//!
//! The registry is plain configuration built once during startup and handed to the
//! help renderer and the slash command definitions. It is never mutated afterwards.

use crate::{model::command::CommandCategory, service::metadata::CommandMetadataStore};

/// Ordered command categories shown in the help index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    categories: Vec<CommandCategory>,
}

impl CommandRegistry {
    /// Creates a registry from explicit categories.
    ///
    /// Category order and the order of names within each category are kept as given.
    pub fn new(categories: Vec<CommandCategory>) -> Self {
        Self { categories }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[CommandCategory] {
        &self.categories
    }

    /// Command names that accept a detailed help lookup.
    ///
    /// This is the union of all category members in category order, with names
    /// listed in more than one category reported once.
    pub fn help_topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();

        for name in self.categories.iter().flat_map(|c| c.commands.iter()) {
            if !topics.contains(&name.as_str()) {
                topics.push(name.as_str());
            }
        }

        topics
    }

    /// Help topics that have no loaded record in `store`.
    ///
    /// A non-empty result is an authoring mistake; it is reported at startup but
    /// does not stop the bot.
    pub fn topics_without_metadata<'a>(&'a self, store: &CommandMetadataStore) -> Vec<&'a str> {
        self.help_topics()
            .into_iter()
            .filter(|name| !store.contains(name))
            .collect()
    }
}

impl Default for CommandRegistry {
    /// The bot's shipped command index.
    fn default() -> Self {
        Self::new(vec![
            CommandCategory::new(
                "Miscellaneous Commands",
                &["credits", "help", "info", "ping", "status"],
            ),
            CommandCategory::new("Moderation Commands", &["ban", "kick", "unban"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::MetadataDirBuilder, error::TestError, fixture};

    #[test]
    fn keeps_declared_category_order() {
        let registry = CommandRegistry::new(vec![
            CommandCategory::new("Misc", &["ping", "info"]),
            CommandCategory::new("Mod", &["kick"]),
        ]);

        let labels: Vec<&str> = registry
            .categories()
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Misc", "Mod"]);
        assert_eq!(registry.categories()[0].commands, vec!["ping", "info"]);
    }

    #[test]
    fn help_topics_are_union_in_order() {
        let registry = CommandRegistry::new(vec![
            CommandCategory::new("Misc", &["ping", "info"]),
            CommandCategory::new("Mod", &["kick", "ping"]),
        ]);

        assert_eq!(registry.help_topics(), vec!["ping", "info", "kick"]);
    }

    #[test]
    fn default_registry_lists_every_command() {
        let registry = CommandRegistry::default();

        assert_eq!(
            registry.help_topics(),
            vec!["credits", "help", "info", "ping", "status", "ban", "kick", "unban"]
        );
    }

    #[test]
    fn reports_topics_without_metadata() -> Result<(), TestError> {
        let test = MetadataDirBuilder::new()
            .with_record("ping", fixture::command_record::json())
            .build()?;
        let store = CommandMetadataStore::load(test.path()).unwrap();
        let registry = CommandRegistry::new(vec![CommandCategory::new(
            "Misc",
            &["ping", "info"],
        )]);

        assert_eq!(registry.topics_without_metadata(&store), vec!["info"]);

        Ok(())
    }

    #[test]
    fn shipped_records_cover_default_registry() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/commands");
        let store = CommandMetadataStore::load(dir).unwrap();

        assert!(CommandRegistry::default()
            .topics_without_metadata(&store)
            .is_empty());
    }
}
