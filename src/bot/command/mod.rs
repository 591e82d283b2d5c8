//! Slash command definitions and dispatch.
//!
//! Each submodule owns one or more commands and exposes a `register` function building
//! its `CreateCommand` and a `run` function executing an invocation. `definitions`
//! collects the registrations and `dispatch` routes an invocation by command name.

pub mod help;
pub mod misc;
pub mod moderation;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId,
};

use crate::{
    error::{command::CommandError, AppError},
    model::{branding::Branding, embed::Embed, moderation::ModerationAction},
    service::registry::CommandRegistry,
    state::BotState,
};

const MODERATION_ACTIONS: [ModerationAction; 3] = [
    ModerationAction::Ban,
    ModerationAction::Kick,
    ModerationAction::Unban,
];

/// Builds the definitions of every slash command the bot serves.
///
/// # Arguments
/// - `registry` - Registry whose help topics become the `/help` topic choices
///
/// # Returns
/// - `Vec<CreateCommand>` - Definitions for bulk registration
pub fn definitions(registry: &CommandRegistry) -> Vec<CreateCommand> {
    let mut commands = vec![
        misc::register_credits(),
        help::register(registry),
        misc::register_info(),
        misc::register_ping(),
        misc::register_status(),
    ];

    commands.extend(MODERATION_ACTIONS.into_iter().map(moderation::register));

    commands
}

/// Routes a slash command invocation to its handler.
///
/// # Returns
/// - `Ok(())` - The handler ran and sent its response
/// - `Err(AppError)` - The handler failed; the caller reports it to the user
pub async fn dispatch(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        "ping" => misc::run_ping(ctx, command).await,
        "status" => misc::run_status(ctx, command, state).await,
        "info" => misc::run_info(ctx, command).await,
        "credits" => misc::run_credits(ctx, command).await,
        help::NAME => help::run(ctx, command, state).await,
        name => match ModerationAction::from_command_name(name) {
            Some(action) => moderation::run(ctx, command, action).await,
            None => Err(CommandError::UnknownCommand(name.to_string()).into()),
        },
    }
}

/// Responds to an invocation with a single embed.
pub(crate) async fn respond_with_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: Embed,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(CreateEmbed::from(embed))
        .ephemeral(ephemeral);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Responds to an invocation with plain text.
pub(crate) async fn respond_with_text(
    ctx: &Context,
    command: &CommandInteraction,
    content: String,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new().content(content);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Guild an invocation happened in, for commands that only work in servers.
pub(crate) fn require_guild(command: &CommandInteraction) -> Result<GuildId, CommandError> {
    command
        .guild_id
        .ok_or_else(|| CommandError::NotInGuild(command.data.name.clone()))
}

/// Resolves the branding of the server an invocation happened in.
///
/// Reads the guild cache first and falls back to fetching the guild over HTTP. If both
/// fail the embed is still sent, just without a server icon.
pub(crate) async fn server_branding(ctx: &Context, guild_id: GuildId) -> Branding {
    let cached = guild_id
        .to_guild_cached(&ctx.cache)
        .map(|guild| Branding::from_guild(&guild));

    if let Some(branding) = cached {
        return branding;
    }

    match guild_id.to_partial_guild(&ctx.http).await {
        Ok(guild) => Branding::new(guild.name.clone(), guild.icon_url()),
        Err(e) => {
            tracing::warn!("Failed to fetch guild {} for branding: {}", guild_id, e);
            Branding::default()
        }
    }
}

/// Branding of the bot account, read from the cache.
pub(crate) fn bot_branding(ctx: &Context) -> Branding {
    Branding::from_bot_user(&ctx.cache.current_user())
}
