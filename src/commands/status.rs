//! Handles `/status`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("status").description("Show bot and service status.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let message = "**✅ Service Status: Online**\n\n\
        📘 Documentation: use `/doc <product>`\n\
        🛒 Purchases & delivery are handled via Sellhub\n\
        🆘 For help, open a support ticket or check the docs\n\n\
        Bot is running normally."
        .to_string();

    super::respond_text(ctx, interaction, message).await;
}
