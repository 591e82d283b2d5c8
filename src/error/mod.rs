//! Error types and user-facing error messages.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors. Startup errors propagate out
//! of `main` and terminate the process, while errors raised during a command invocation
//! are converted into a short message for the invoking user by `AppError::user_message`.

pub mod command;
pub mod config;
pub mod metadata;

use thiserror::Error;

use crate::error::{
    command::{CommandError, HelpError},
    config::ConfigError,
    metadata::{MetadataError, StartupLoadError},
};

/// Generic reply shown for failures that carry no user-relevant detail.
const GENERIC_FAILURE_MESSAGE: &str = "Oops! Something seems to have gone wrong...";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so handlers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command help records could not be loaded.
    ///
    /// Prevents the bot from connecting to Discord so it never serves with
    /// missing help metadata.
    #[error(transparent)]
    StartupLoadErr(#[from] StartupLoadError),

    /// Lookup against the metadata store failed.
    #[error(transparent)]
    MetadataErr(#[from] MetadataError),

    /// The help renderer could not produce the requested topic.
    #[error(transparent)]
    HelpErr(#[from] HelpError),

    /// Slash command dispatch error.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when the platform rejects an action, for
    /// example kicking a member ranked above the bot.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text shown to the user who invoked a command.
    ///
    /// Errors the user can act on get a specific message. Everything else gets a
    /// generic message so internal details never leak into the channel.
    ///
    /// # Returns
    /// - `String` - Message suitable for an ephemeral interaction reply
    pub fn user_message(&self) -> String {
        match self {
            Self::HelpErr(HelpError::TopicNotFound(topic)) => {
                format!("No detailed help is available for `{}`.", topic)
            }
            Self::CommandErr(CommandError::NotInGuild(_)) => {
                "This command can only be used in a server.".to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_not_found_names_the_topic() {
        let err = AppError::from(HelpError::TopicNotFound("nonexistent".to_string()));

        assert_eq!(
            err.user_message(),
            "No detailed help is available for `nonexistent`."
        );
    }

    #[test]
    fn not_in_guild_has_dedicated_message() {
        let err = AppError::from(CommandError::NotInGuild("kick".to_string()));

        assert_eq!(
            err.user_message(),
            "This command can only be used in a server."
        );
    }

    #[test]
    fn internal_errors_use_generic_message() {
        let err = AppError::from(CommandError::MissingOption {
            command: "kick".to_string(),
            option: "user".to_string(),
        });

        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        // Detail is still available for logging
        assert!(err.to_string().contains("missing required option 'user'"));
    }

    #[test]
    fn unknown_command_uses_generic_message() {
        let err = AppError::from(CommandError::UnknownCommand("stats".to_string()));

        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
