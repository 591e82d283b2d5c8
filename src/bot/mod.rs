//! Discord bot integration.
//!
//! This module wires the services to Discord through Serenity. `start` builds and runs
//! the client, `handler` reacts to gateway events, and `command` defines the slash
//! commands and turns each invocation into a service call plus one response.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. It keeps the guild cache populated, which
//! provides server icons for embed headers and the server count for `/status`. Slash
//! command invocations arrive as interactions and need no additional intents.

pub mod command;
pub mod handler;
pub mod start;
