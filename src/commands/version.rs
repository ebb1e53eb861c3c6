//! Handles `/version`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

/// Baked in at build time from the package manifest.
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn register() -> CreateCommand {
    CreateCommand::new("version").description("Show the running bot version.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    super::respond_text(ctx, interaction, format!("doclink-bot v{VERSION}")).await;
}
