//! StorySmith Engine - HTTP server entry point.

use std::sync::Arc;

use anyhow::Context;

use storysmith_engine::api;
use storysmith_engine::infrastructure::config::{load_dotenv, AppConfig};
use storysmith_engine::infrastructure::telemetry::init_tracing;
use storysmith_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing("storysmith_engine=debug,tower_http=debug");

    tracing::info!("Starting StorySmith Engine");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let app = Arc::new(App::with_provider_config(&config.provider));
    let router = api::http::router(app, config.server.cors_allowed_origins.as_deref());

    let (host, port) = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
