//! Shared application state, stored in Serenity's global `TypeMap`.

use std::sync::Arc;
use std::time::Instant;

use serenity::prelude::TypeMapKey;

use crate::config::Config;

/// The central, shared state of the application. An `Arc<AppState>` is
/// stored in the global context at startup and is read-only afterwards —
/// no locks needed beyond the TypeMap access itself.
pub struct AppState {
    /// Process configuration, immutable after startup.
    pub config: Config,
    /// Wall-clock anchor for the `/uptime` command.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config, started_at: Instant::now() }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
