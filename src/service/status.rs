//! Latency and status reporting for `/ping` and `/status`.

use std::time::Duration;

use crate::model::{
    branding::Branding,
    embed::{colour, Embed},
};

/// Date the bot was first created, shown in `/status`.
const BOT_CREATED: &str = "2020-11-08";

const DEVELOPERS: &str =
    "<@123456133368119296>\nFeel free to leave suggestions and report bugs to us.";

const STATUS_FOOTER: &str = "Bot is hosted.";

/// Point-in-time figures shown by `/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Number of guilds the bot is currently in
    pub guild_count: usize,
    /// Time since the bot process started
    pub uptime: Duration,
    /// Running bot version
    pub version: String,
}

/// Formats the `/ping` reply from the shard's heartbeat latency.
///
/// # Arguments
/// - `latency` - Last measured heartbeat round trip, `None` before the first heartbeat ack
///
/// # Returns
/// - `String` - e.g. ":ping_pong: 42 ms"
pub fn format_latency(latency: Option<Duration>) -> String {
    match latency {
        Some(latency) => format!(":ping_pong: {} ms", latency.as_millis()),
        None => ":ping_pong: latency not yet measured".to_string(),
    }
}

/// Formats an uptime as hours, minutes and seconds.
///
/// Hours are not wrapped into days, so a week of uptime reads "168 hour(s), ...".
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();

    format!(
        "{} hour(s), {} minute(s), {} second(s)",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Builds the `/status` embed.
///
/// # Arguments
/// - `snapshot` - Current guild count, uptime and version
/// - `bot` - Branding of the bot account, used as the author header
///
/// # Returns
/// - `Embed` - Status embed ready for conversion
pub fn build_status_embed(snapshot: &StatusSnapshot, bot: &Branding) -> Embed {
    Embed::new("Status", colour::BLUE)
        .description(format!("These are the current status of {}", bot.name))
        .author(&bot.name, bot.icon_url.clone())
        .field("Bot created", BOT_CREATED, false)
        .field("Servers", snapshot.guild_count.to_string(), true)
        .field("Up time", format_uptime(snapshot.uptime), false)
        .field("Developers", DEVELOPERS, false)
        .field("Version", &snapshot.version, false)
        .footer(STATUS_FOOTER)
}
