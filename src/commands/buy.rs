//! Handles `/buy`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::constants::STORE_URL;

pub fn register() -> CreateCommand {
    CreateCommand::new("buy").description("Where to purchase products.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let message = format!("🛒 Purchases are handled through our store: {STORE_URL}");
    super::respond_text(ctx, interaction, message).await;
}
