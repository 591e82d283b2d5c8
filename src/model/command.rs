//! Command help records and category groupings.

use serde::Deserialize;

/// Help metadata for a single command, loaded from `<name>.json`.
///
/// Records are authored outside the bot and are immutable once loaded.
/// `title` and `description` must be non-empty; `fields` may be empty and
/// are rendered in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandRecord {
    pub title: String,
    pub description: String,
    pub fields: Vec<CommandField>,
}

/// A named section of a command's detailed help.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandField {
    pub name: String,
    pub value: String,
}

/// A labelled, ordered group of command names shown in the help index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCategory {
    pub label: String,
    pub commands: Vec<String>,
}

impl CommandCategory {
    pub fn new(label: impl Into<String>, commands: &[&str]) -> Self {
        Self {
            label: label.into(),
            commands: commands.iter().map(|name| name.to_string()).collect(),
        }
    }
}
