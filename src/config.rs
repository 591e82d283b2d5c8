use std::path::PathBuf;

use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

/// Directory holding the command help records, relative to the working directory.
const DEFAULT_COMMAND_DATA_DIR: &str = "./data/commands";

pub struct Config {
    pub discord_bot_token: String,

    /// Directory the command help records are loaded from.
    pub command_data_dir: PathBuf,

    /// Guild to register slash commands in for development.
    ///
    /// Guild commands update instantly while global commands can take up to an
    /// hour to propagate. `None` registers globally.
    pub dev_guild_id: Option<GuildId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Split out of `from_env` so parsing can be tested without touching the
    /// process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: lookup("DISCORD_BOT_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_data_dir: lookup("COMMAND_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COMMAND_DATA_DIR)),
            dev_guild_id: lookup("DEV_GUILD_ID")
                .map(|value| parse_guild_id("DEV_GUILD_ID", &value))
                .transpose()?,
        })
    }
}

fn parse_guild_id(name: &str, value: &str) -> Result<GuildId, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(GuildId::new)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn requires_bot_token() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "token")])).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.command_data_dir, PathBuf::from("./data/commands"));
        assert_eq!(config.dev_guild_id, None);
    }

    #[test]
    fn reads_optional_values() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("COMMAND_DATA_DIR", "/srv/sushibot/commands"),
            ("DEV_GUILD_ID", "807465587633553409"),
        ]))
        .unwrap();

        assert_eq!(
            config.command_data_dir,
            PathBuf::from("/srv/sushibot/commands")
        );
        assert_eq!(config.dev_guild_id, Some(GuildId::new(807465587633553409)));
    }

    #[test]
    fn rejects_invalid_guild_id() {
        for value in ["not-a-number", "0", "-5"] {
            let result = Config::from_lookup(lookup(&[
                ("DISCORD_BOT_TOKEN", "token"),
                ("DEV_GUILD_ID", value),
            ]));

            assert!(matches!(
                result,
                Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
            ));
        }
    }
}
