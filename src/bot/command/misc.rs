//! The miscellaneous commands: `/ping`, `/status`, `/info` and `/credits`.

use std::time::Duration;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::command::{bot_branding, respond_with_embed, respond_with_text},
    error::AppError,
    service::{
        about::{build_credits_embed, build_info_embed},
        status::{build_status_embed, format_latency, StatusSnapshot},
    },
    state::{BotState, ShardManagerContainer},
};

pub fn register_ping() -> CreateCommand {
    CreateCommand::new("ping").description("Shows the bot's latency")
}

pub fn register_status() -> CreateCommand {
    CreateCommand::new("status").description("Shows the bot's current status")
}

pub fn register_info() -> CreateCommand {
    CreateCommand::new("info").description("Links to the bot's repository and policies")
}

pub fn register_credits() -> CreateCommand {
    CreateCommand::new("credits").description("Shows the people who worked on the bot")
}

/// Replies with the heartbeat latency of the shard that received the invocation.
pub async fn run_ping(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let latency = shard_latency(ctx).await;

    respond_with_text(ctx, command, format_latency(latency)).await
}

pub async fn run_status(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> Result<(), AppError> {
    let snapshot = StatusSnapshot {
        guild_count: ctx.cache.guild_count(),
        uptime: state.uptime(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let embed = build_status_embed(&snapshot, &bot_branding(ctx));

    respond_with_embed(ctx, command, embed, false).await
}

pub async fn run_info(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let embed = build_info_embed(&bot_branding(ctx));

    respond_with_embed(ctx, command, embed, false).await
}

pub async fn run_credits(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let embed = build_credits_embed(&bot_branding(ctx));

    respond_with_embed(ctx, command, embed, false).await
}

/// Last measured heartbeat latency of the current shard.
///
/// `None` until the first heartbeat is acknowledged, or when the shard manager was
/// never stored in the client data.
async fn shard_latency(ctx: &Context) -> Option<Duration> {
    let shard_manager = {
        let data = ctx.data.read().await;
        data.get::<ShardManagerContainer>().cloned()
    };

    let Some(shard_manager) = shard_manager else {
        tracing::warn!("Shard manager missing from client data");
        return None;
    };

    let runners = shard_manager.runners.lock().await;

    runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
}
