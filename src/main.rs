mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, error::AppError, service::registry::CommandRegistry, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let registry = CommandRegistry::default();
    let metadata = startup::load_command_metadata(&config, &registry)?;
    let state = BotState::new(metadata, registry);

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
