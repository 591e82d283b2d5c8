use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::{bot::command, state::BotState};

/// Handles an interaction by dispatching slash commands.
///
/// Any error from a command is logged and answered with an ephemeral message, so a
/// failing invocation never takes down the event loop. Other interaction kinds are
/// ignored since the bot registers no components or modals.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(invocation) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from user {} in guild {:?}",
        invocation.data.name,
        invocation.user.id,
        invocation.guild_id
    );

    let Err(e) = command::dispatch(&ctx, &invocation, state).await else {
        return;
    };

    tracing::error!("Command /{} failed: {}", invocation.data.name, e);

    let reply = CreateInteractionResponseMessage::new()
        .content(e.user_message())
        .ephemeral(true);

    if let Err(e) = invocation
        .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
        .await
    {
        tracing::error!(
            "Failed to send error reply for /{}: {}",
            invocation.data.name,
            e
        );
    }
}
