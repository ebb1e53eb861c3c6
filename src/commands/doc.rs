//! Handles `/doc <productname>` and its autocomplete provider.

use serenity::builder::{
    CreateAutocompleteResponse, CreateCommand, CreateCommandOption, CreateInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

use crate::docs;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("doc")
        .description("Get the GitBook doc link for a product.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "productname", "Pick a product")
                .required(true)
                .set_autocomplete(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let product = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "productname")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();

    let url = docs::resolve_url(&state.config.doc_base_url, product);
    super::respond_text(ctx, interaction, url).await;
}

/// Fires on every keystroke while the user fills in the product option.
/// Stateless: the candidate list is recomputed from the table each time.
pub async fn autocomplete(ctx: &Context, interaction: &CommandInteraction) {
    let partial = interaction
        .data
        .autocomplete()
        .map(|opt| opt.value)
        .unwrap_or_default();

    let mut response = CreateAutocompleteResponse::new();
    for key in docs::suggest_products(partial) {
        response = response.add_string_choice(key, key);
    }

    if let Err(error) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        tracing::warn!(%error, "failed to send autocomplete choices");
    }
}
