//! Handles `/faq`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("faq").description("Frequently asked questions.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let mut message = "**❓ Frequently Asked Questions**\n\n\
        **Where are the docs?** Use `/doc <product>` and pick a product.\n\
        **Where do I buy?** Purchases and delivery run through Sellhub, see `/buy`.\n\
        **Something broke?** Start with `/doc troubleshooting`, then open a ticket."
        .to_string();

    if let Some(url) = &state.config.faq_url {
        message.push_str(&format!("\n\nFull FAQ: {url}"));
    }

    super::respond_text(ctx, interaction, message).await;
}
