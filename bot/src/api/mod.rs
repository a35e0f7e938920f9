//! Router and Application State

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::actions::guard::ConfirmationGuard;
use crate::config::Config;
use crate::events;
use crate::platform::PlatformClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration
    pub config: Arc<Config>,
    /// Platform REST client
    pub platform: PlatformClient,
    /// Single-confirmation guard for pending cards
    pub confirmations: ConfirmationGuard,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, platform: PlatformClient) -> Self {
        Self {
            config: Arc::new(config),
            platform,
            confirmations: ConfirmationGuard::new(),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", post(events::receive_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Number of configured target guilds
    target_guilds: usize,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        target_guilds: state.config.target_guild_ids.len(),
    })
}
