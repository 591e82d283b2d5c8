//! Bot state shared across all command invocations.
//!
//! This module defines the `BotState` struct which holds everything the command
//! handlers need besides the Serenity context. The state is built once during
//! startup, handed to the event handler, and only read afterwards.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serenity::{gateway::ShardManager, prelude::TypeMapKey};

use crate::service::{metadata::CommandMetadataStore, registry::CommandRegistry};

/// Bot state containing shared, immutable resources.
///
/// All fields are cheap to clone:
/// - `Arc<CommandMetadataStore>` and `Arc<CommandRegistry>` share the loaded data
/// - `DateTime<Utc>` is `Copy`
#[derive(Clone)]
pub struct BotState {
    /// Help records loaded at startup.
    pub metadata: Arc<CommandMetadataStore>,

    /// Command categories used for the help index and `/help` choices.
    pub registry: Arc<CommandRegistry>,

    /// When the bot process finished startup, used for `/status` uptime.
    pub started_at: DateTime<Utc>,
}

impl BotState {
    /// Creates the bot state from the loaded metadata and registry.
    ///
    /// # Arguments
    /// - `metadata` - Fully loaded metadata store
    /// - `registry` - Command registry
    ///
    /// # Returns
    /// - `BotState` - State with `started_at` set to now
    pub fn new(metadata: CommandMetadataStore, registry: CommandRegistry) -> Self {
        Self {
            metadata: Arc::new(metadata),
            registry: Arc::new(registry),
            started_at: Utc::now(),
        }
    }

    /// Time elapsed since startup.
    ///
    /// Clamped to zero if the system clock moved backwards.
    pub fn uptime(&self) -> Duration {
        (Utc::now() - self.started_at).to_std().unwrap_or_default()
    }
}

/// Type map key giving command handlers access to the shard manager.
///
/// The shard manager only exists once the client is built, after the event
/// handler has been created, so it is shared through the client's type map.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}
