//! `/kick`, `/ban` and `/unban`.
//!
//! All three share the same options: the target user, an optional audit log reason and a
//! `discrete` flag that makes the result embed visible only to the moderator.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId,
    PartialMember, Permissions, ResolvedOption, ResolvedValue, User,
};

use crate::{
    bot::command::{require_guild, respond_with_embed, server_branding},
    error::{command::CommandError, AppError},
    model::moderation::{ModerationAction, ModerationTarget},
    service::moderation::build_moderation_embed,
};

const USER_OPTION: &str = "user";
const REASON_OPTION: &str = "reason";
const DISCRETE_OPTION: &str = "discrete";

/// Parsed options of a moderation invocation.
struct ModerationOptions<'a> {
    user: &'a User,
    member: Option<&'a PartialMember>,
    reason: Option<&'a str>,
    discrete: bool,
}

/// Builds the definition of a moderation command.
///
/// Only members holding the matching permission see the command; Discord enforces this
/// before the invocation reaches the bot.
pub fn register(action: ModerationAction) -> CreateCommand {
    let (description, user_description, permission) = match action {
        ModerationAction::Kick => (
            "Kicks a member from the server",
            "The member to kick",
            Permissions::KICK_MEMBERS,
        ),
        ModerationAction::Ban => (
            "Bans a user from the server",
            "The user to ban",
            Permissions::BAN_MEMBERS,
        ),
        ModerationAction::Unban => (
            "Unbans a user from the server",
            "The user to unban",
            Permissions::BAN_MEMBERS,
        ),
    };

    CreateCommand::new(action.command_name())
        .description(description)
        .default_member_permissions(permission)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, USER_OPTION, user_description)
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                REASON_OPTION,
                "Reason shown in the audit log",
            )
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                DISCRETE_OPTION,
                "Only show the result to you",
            )
            .required(false),
        )
}

/// Performs the moderation action and replies with the result embed.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    action: ModerationAction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;

    let resolved = command.data.options();
    let options = parse_options(command, &resolved)?;

    apply(ctx, guild_id, action, options.user, options.reason).await?;

    tracing::info!(
        "{} performed /{} on user {} in guild {}",
        command.user.id,
        action.command_name(),
        options.user.id,
        guild_id
    );

    let target = ModerationTarget::from_user(options.user, options.member);
    let server = server_branding(ctx, guild_id).await;
    let embed = build_moderation_embed(action, &target, options.reason, &server);

    respond_with_embed(ctx, command, embed, options.discrete).await
}

fn parse_options<'a>(
    command: &CommandInteraction,
    resolved: &'a [ResolvedOption<'a>],
) -> Result<ModerationOptions<'a>, CommandError> {
    let mut user = None;
    let mut reason = None;
    let mut discrete = false;

    for option in resolved {
        match (option.name, &option.value) {
            (USER_OPTION, ResolvedValue::User(u, m)) => user = Some((*u, *m)),
            (REASON_OPTION, ResolvedValue::String(r)) => reason = Some(*r),
            (DISCRETE_OPTION, ResolvedValue::Boolean(d)) => discrete = *d,
            _ => {}
        }
    }

    let (user, member) = user.ok_or_else(|| CommandError::MissingOption {
        command: command.data.name.clone(),
        option: USER_OPTION.to_string(),
    })?;

    Ok(ModerationOptions {
        user,
        member,
        reason,
        discrete,
    })
}

async fn apply(
    ctx: &Context,
    guild_id: GuildId,
    action: ModerationAction,
    user: &User,
    reason: Option<&str>,
) -> Result<(), AppError> {
    match (action, reason) {
        (ModerationAction::Kick, Some(reason)) => {
            guild_id.kick_with_reason(&ctx.http, user.id, reason).await?
        }
        (ModerationAction::Kick, None) => guild_id.kick(&ctx.http, user.id).await?,
        (ModerationAction::Ban, Some(reason)) => {
            guild_id
                .ban_with_reason(&ctx.http, user.id, 0, reason)
                .await?
        }
        (ModerationAction::Ban, None) => guild_id.ban(&ctx.http, user.id, 0).await?,
        (ModerationAction::Unban, reason) => {
            ctx.http.remove_ban(guild_id, user.id, reason).await?
        }
    }

    Ok(())
}
