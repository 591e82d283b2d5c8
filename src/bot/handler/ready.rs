//! Ready event handler for bot initialization.
//!
//! The ready event fires after the bot connects to Discord's gateway and completes the
//! initial handshake, and again after every full reconnect. The handler:
//! - Logs connection information
//! - Sets the bot's presence
//! - Registers the slash commands (overwriting, so repeated registration is harmless)

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::{bot::command, state::BotState};

/// Activity shown under the bot's name in the member list.
const PRESENCE: &str = "Welcome to the world of sushis!";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Bot state providing the registry for the `/help` choices
/// - `dev_guild_id` - Guild to register commands in, or `None` to register globally
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &BotState,
    dev_guild_id: Option<GuildId>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(PRESENCE)));

    let commands = command::definitions(&state.registry);

    let result = match dev_guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match (result, dev_guild_id) {
        (Ok(registered), Some(guild_id)) => tracing::info!(
            "Registered {} slash commands in guild {}",
            registered.len(),
            guild_id
        ),
        (Ok(registered), None) => tracing::info!(
            "Registered {} global slash commands (may take up to an hour to propagate)",
            registered.len()
        ),
        (Err(e), _) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
