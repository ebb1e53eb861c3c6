use std::sync::Arc;

use anyhow::{Context as _, Result};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

use doclink_bot::config::Config;
use doclink_bot::handler::Handler;
use doclink_bot::health;
use doclink_bot::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Fatal on missing/malformed values, before anything touches the network.
    let config = Config::from_env()?;

    let app_state = Arc::new(AppState::new(config.clone()));

    health::spawn(config.health_port)
        .await
        .context("Failed to start the health endpoint")?;

    // Slash-command interactions arrive regardless of gateway intents.
    let mut client = Client::builder(&config.token, GatewayIntents::empty())
        .event_handler(Handler)
        .await
        .context("Error creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    client.start().await.context("Discord client error")?;
    Ok(())
}
