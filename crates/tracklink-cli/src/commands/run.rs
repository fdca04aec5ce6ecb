//! `tracklink run`: the interaction relay

use crate::args::RunArgs;
use crate::gateway::Gateway;
use anyhow::Context as _;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracklink_core::{CommandRegistry, TrackCommand, TrackerClient, TrackerConfig};

/// Build the handler registry for the given tracker settings
pub fn build_registry(config: TrackerConfig) -> anyhow::Result<CommandRegistry> {
    let tracker = TrackerClient::new(config.clone())?;

    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(TrackCommand::new(Arc::new(tracker), config)));
    Ok(registry)
}

pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = TrackerConfig::new(
        &args.public_base,
        args.hook_token,
        Duration::from_secs(args.timeout_secs),
    )?;
    info!(
        "Relaying /track to {} (timeout {:?})",
        config.convert_url(),
        config.timeout()
    );
    if config.hook_token().is_none() {
        warn!("HOOK_TOKEN is not set; requests to the tracker are unauthenticated");
    }

    let registry = build_registry(config)?;
    let mut client = Client::builder(&args.bot_token, GatewayIntents::GUILDS)
        .event_handler(Gateway::new(Arc::new(registry)))
        .await
        .context("Failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, closing gateway connections");
            shard_manager.shutdown_all().await;
        }
    });

    client
        .start()
        .await
        .context("Discord gateway connection failed")?;
    Ok(())
}
