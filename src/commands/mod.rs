// src/commands/mod.rs
// One module per slash command.

pub mod buy;
pub mod doc;
pub mod faq;
pub mod help;
pub mod refund;
pub mod status;
pub mod uptime;
pub mod version;

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

/// Send a single plain-text reply to a slash command invocation.
pub(crate) async fn respond_text(ctx: &Context, interaction: &CommandInteraction, content: String) {
    let builder = CreateInteractionResponseMessage::new().content(content);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(error) = interaction.create_response(&ctx.http, response).await {
        tracing::warn!(command = %interaction.data.name, %error, "failed to send response");
    }
}

/// Same, but visible only to the invoking user.
pub(crate) async fn respond_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: String,
) {
    let builder = CreateInteractionResponseMessage::new().content(content).ephemeral(true);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(error) = interaction.create_response(&ctx.http, response).await {
        tracing::warn!(command = %interaction.data.name, %error, "failed to send response");
    }
}
