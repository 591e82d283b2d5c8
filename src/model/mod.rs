//! Plain domain types shared by the services and the bot layer.
//!
//! Nothing in this module talks to Discord. Services build these types and the
//! bot layer converts them into Serenity builders right before sending.

pub mod branding;
pub mod command;
pub mod embed;
pub mod moderation;
