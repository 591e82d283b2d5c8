use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedValue,
};

use crate::{
    bot::command::{require_guild, respond_with_embed, server_branding},
    error::AppError,
    service::{help::HelpRenderer, registry::CommandRegistry},
    state::BotState,
};

pub const NAME: &str = "help";

const TOPIC_OPTION: &str = "topic";

/// Builds the `/help` definition with one topic choice per registry command.
pub fn register(registry: &CommandRegistry) -> CreateCommand {
    let topic = registry.help_topics().into_iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            TOPIC_OPTION,
            "Command to get detailed help for",
        )
        .required(false),
        |option, name| option.add_string_choice(name, name),
    );

    CreateCommand::new(NAME)
        .description("Lists the available commands or describes one of them")
        .add_option(topic)
}

/// Renders the help index, or the requested topic, for the invoking server.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;

    let options = command.data.options();
    let topic = options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == TOPIC_OPTION => Some(value),
        _ => None,
    });

    let branding = server_branding(ctx, guild_id).await;
    let embed = HelpRenderer::new(&state.metadata, &state.registry).render(topic, &branding)?;

    respond_with_embed(ctx, command, embed, false).await
}
