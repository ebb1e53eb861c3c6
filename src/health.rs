//! Liveness endpoint for the hosting platform.
//!
//! `GET /` and `GET /healthz` answer `200 ok`; everything else falls through
//! to axum's default 404. Runs on its own task for the process lifetime and
//! touches no bot state. Individual requests are deliberately not logged —
//! platform probes would drown everything else out.

use axum::{routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(ok)).route("/healthz", get(ok))
}

async fn ok() -> &'static str {
    "ok"
}

/// Bind the listener and serve it on a background task. The bind itself
/// happens here so a bad port fails startup instead of dying silently later.
pub async fn spawn(port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "health endpoint listening");

    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router()).await {
            tracing::error!(%error, "health endpoint terminated unexpectedly");
        }
    });

    Ok(())
}
