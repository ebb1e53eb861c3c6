//! Handles `/refund`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::constants::REFUND_POLICY_URL;

pub fn register() -> CreateCommand {
    CreateCommand::new("refund").description("Read the refund policy.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let message = format!("↩️ Refund policy: {REFUND_POLICY_URL}");
    super::respond_text(ctx, interaction, message).await;
}
