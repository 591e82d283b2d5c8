use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::state::BotState;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
    /// Guild to register slash commands in, or `None` for global registration
    pub dev_guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(state: BotState, dev_guild_id: Option<GuildId>) -> Self {
        Self {
            state,
            dev_guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, self.dev_guild_id, ctx, ready).await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
