use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    state::{BotState, ShardManagerContainer},
};

/// Builds the Discord client.
///
/// Creates the Serenity client with the bot's event handler and stores the client's
/// shard manager in its type map so `/ping` can read heartbeat latency.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Fully initialized bot state
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state, config.dev_guild_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    client
        .data
        .write()
        .await
        .insert::<ShardManagerContainer>(client.shard_manager.clone());

    Ok(client)
}

/// Connects to Discord and processes events until shutdown.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connecting or the gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
