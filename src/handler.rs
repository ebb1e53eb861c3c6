//! The Serenity event handler: registers the slash commands on ready and
//! dispatches interaction events to the per-command modules.

use serenity::async_trait;
use serenity::client::Context;
use serenity::gateway::ActivityData;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::model::user::OnlineStatus;
use serenity::prelude::EventHandler;

use crate::commands;
use crate::AppState;

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!("AppState missing from TypeMap; dropping interaction");
            return;
        };

        match &interaction {
            Interaction::Command(command) => match command.data.name.as_str() {
                "doc" => commands::doc::run_slash(&ctx, command, &app_state).await,
                "status" => commands::status::run_slash(&ctx, command).await,
                "buy" => commands::buy::run_slash(&ctx, command).await,
                "refund" => commands::refund::run_slash(&ctx, command).await,
                "faq" => commands::faq::run_slash(&ctx, command, &app_state).await,
                "uptime" => commands::uptime::run_slash(&ctx, command, &app_state).await,
                "version" => commands::version::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                _ => {}
            },
            Interaction::Autocomplete(autocomplete) => {
                if autocomplete.data.name == "doc" {
                    commands::doc::autocomplete(&ctx, autocomplete).await;
                }
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "connected and ready");

        ctx.set_presence(Some(ActivityData::playing("/doc")), OnlineStatus::Online);

        let commands_to_register = vec![
            commands::doc::register(),
            commands::status::register(),
            commands::buy::register(),
            commands::refund::register(),
            commands::faq::register(),
            commands::uptime::register(),
            commands::version::register(),
            commands::help::register(),
        ];

        // Global sync; can take a while to propagate on Discord's side.
        match Command::set_global_commands(&ctx.http, commands_to_register).await {
            Ok(registered) => {
                tracing::info!(count = registered.len(), "registered global slash commands");
            }
            Err(error) => {
                tracing::error!(%error, "failed to register global slash commands");
            }
        }
    }
}
