//! Handles `/uptime`.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("uptime").description("How long the bot has been running.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let elapsed = state.started_at.elapsed().as_secs();
    let message = format!("⏱️ Uptime: {}", format_uptime(elapsed));
    super::respond_text(ctx, interaction, message).await;
}

/// Render elapsed seconds as `{d}d {h}h {m}m {s}s`, dropping zero-valued
/// units from the most significant end down: `45s`, `3m 2s`, `2h 0m 5s`.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
