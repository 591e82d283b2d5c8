mod render_index;

use super::*;
use crate::model::command::CommandCategory;
use test_utils::{builder::MetadataDirBuilder, error::TestError, fixture};

const ICON_URL: &str = "https://cdn.discordapp.com/icons/1/abc.webp";

fn server_branding() -> Branding {
    Branding::new("Sushi Lounge", Some(ICON_URL.to_string()))
}

fn scenario_registry() -> CommandRegistry {
    CommandRegistry::new(vec![
        CommandCategory::new("Misc", &["ping", "info"]),
        CommandCategory::new("Mod", &["kick"]),
    ])
}
