use thiserror::Error;

/// Errors raised while dispatching a slash command invocation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Discord delivered a command name this bot never registered.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// A required option was absent from the invocation payload.
    ///
    /// Discord validates required options before dispatch, so this indicates
    /// the registered command definitions are out of sync with the handlers.
    #[error("Command '{command}' is missing required option '{option}'")]
    MissingOption {
        /// Name of the invoked command
        command: String,
        /// Name of the missing option
        option: String,
    },

    /// A guild-only command was invoked outside of a guild.
    #[error("Command '{0}' can only be used in a server")]
    NotInGuild(String),
}

/// Errors raised by the help renderer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HelpError {
    /// The requested topic has no loaded help record.
    #[error("No detailed help is available for '{0}'")]
    TopicNotFound(String),
}
