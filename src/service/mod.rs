//! Command logic that does not talk to Discord.
//!
//! Each service turns its inputs into a plain `Embed` or string. The bot layer
//! gathers the inputs from the invocation, calls a service and sends the result.

pub mod about;
pub mod help;
pub mod metadata;
pub mod moderation;
pub mod registry;
pub mod status;
