//! Warden - Main Entry Point
//!
//! Cross-guild moderation action relay.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use warden_bot::{api, config, platform, registrar};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden_bot=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        control_guild = %config.control_guild_id,
        targets = config.target_guild_ids.len(),
        "Starting Warden"
    );

    if config.target_guild_ids.is_empty() {
        warn!("TARGET_GUILD_IDS is empty; confirmed actions will apply to no guilds");
    }
    if config.staff_role_ids.is_empty() {
        warn!("STAFF_ROLE_IDS is empty; every request will be refused");
    }

    // Platform REST client
    let platform = platform::PlatformClient::new(
        &config.platform_base_url,
        &config.bot_token,
        Duration::from_secs(config.platform_timeout_secs),
    )?;

    // Register slash commands (fatal on failure; the relay is useless without them)
    registrar::register_commands(&platform, config.application_id).await?;

    // Build application state and router
    let bind_address = config.bind_address.clone();
    let state = api::AppState::new(config, platform);
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Event endpoint listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Relay shutdown complete");

    Ok(())
}
