use crate::{
    config::Config,
    error::AppError,
    service::{metadata::CommandMetadataStore, registry::CommandRegistry},
};

/// Installs the global tracing subscriber.
///
/// Log filtering follows the `RUST_LOG` environment variable and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Loads the command help records from the configured directory.
///
/// Must complete before the bot connects to Discord; any malformed record aborts
/// startup. After loading, every registry topic without a record is logged as a
/// warning. Such topics still appear in the help index but `/help <topic>` will
/// answer that no detailed help is available.
///
/// # Arguments
/// - `config` - Application configuration containing the record directory
/// - `registry` - Command registry to check the loaded records against
///
/// # Returns
/// - `Ok(CommandMetadataStore)` - Fully loaded, read-only metadata store
/// - `Err(AppError::StartupLoadErr)` - The directory or a record could not be loaded
pub fn load_command_metadata(
    config: &Config,
    registry: &CommandRegistry,
) -> Result<CommandMetadataStore, AppError> {
    let store = CommandMetadataStore::load(&config.command_data_dir).inspect_err(|e| {
        tracing::error!("Failed to load command help records: {}", e);
    })?;

    tracing::info!(
        "Loaded {} command help records from {}",
        store.len(),
        config.command_data_dir.display()
    );

    if store.is_empty() {
        tracing::warn!(
            "No command help records found in {}",
            config.command_data_dir.display()
        );
    }

    for topic in registry.topics_without_metadata(&store) {
        tracing::warn!("Help topic '{}' has no command record", topic);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::metadata::StartupLoadError, model::command::CommandCategory};
    use test_utils::{builder::MetadataDirBuilder, error::TestError, fixture};

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            discord_bot_token: "token".to_string(),
            command_data_dir: dir.to_path_buf(),
            dev_guild_id: None,
        }
    }

    #[test]
    fn loads_records_even_when_topics_are_missing() -> Result<(), TestError> {
        let test = MetadataDirBuilder::new()
            .with_record("ping", fixture::command_record::json())
            .build()?;
        let registry =
            CommandRegistry::new(vec![CommandCategory::new("Misc", &["ping", "info"])]);

        let store = load_command_metadata(&config_for(test.path()), &registry).unwrap();

        assert_eq!(store.names(), vec!["ping"]);

        Ok(())
    }

    #[test]
    fn empty_directory_loads_empty_store() -> Result<(), TestError> {
        let test = MetadataDirBuilder::new().build()?;

        let store =
            load_command_metadata(&config_for(test.path()), &CommandRegistry::default()).unwrap();

        assert!(store.is_empty());

        Ok(())
    }

    #[test]
    fn malformed_record_fails_startup() -> Result<(), TestError> {
        let test = MetadataDirBuilder::new()
            .with_raw_file("ping.json", r#"{"title": 5}"#)
            .build()?;

        let result = load_command_metadata(&config_for(test.path()), &CommandRegistry::default());

        assert!(matches!(
            result,
            Err(AppError::StartupLoadErr(StartupLoadError::ParseRecord { .. }))
        ));

        Ok(())
    }
}
