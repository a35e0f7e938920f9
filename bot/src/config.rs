//! Relay Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use uuid::Uuid;

/// Relay configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address for the event endpoint (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Base URL of the platform REST API (e.g., "https://chat.example.org")
    pub platform_base_url: String,

    /// Bot token used as the bearer credential on outbound calls
    pub bot_token: String,

    /// Bot application id (owns the registered slash commands)
    pub application_id: Uuid,

    /// Secret for verifying inbound event signatures
    pub event_signing_secret: String,

    /// The single guild in which moderation commands may be invoked
    pub control_guild_id: Uuid,

    /// Channel receiving confirmation cards
    pub log_channel_id: Uuid,

    /// Guilds confirmed actions are replayed to, in replay order
    pub target_guild_ids: Vec<Uuid>,

    /// Role ids allowed to request and confirm actions
    pub staff_role_ids: Vec<Uuid>,

    /// Whether to direct-message the target user after a confirmed action
    pub notify_target_user: bool,

    /// Per-call timeout for outbound platform requests, in seconds (default: 10)
    pub platform_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            platform_base_url: env::var("PLATFORM_BASE_URL")
                .context("PLATFORM_BASE_URL must be set")?,
            bot_token: env::var("BOT_TOKEN").context("BOT_TOKEN must be set")?,
            application_id: parse_uuid_var("APPLICATION_ID")?,
            event_signing_secret: env::var("EVENT_SIGNING_SECRET")
                .context("EVENT_SIGNING_SECRET must be set")?,
            control_guild_id: parse_uuid_var("CONTROL_GUILD_ID")?,
            log_channel_id: parse_uuid_var("LOG_CHANNEL_ID")?,
            target_guild_ids: parse_uuid_list_var("TARGET_GUILD_IDS")?,
            staff_role_ids: parse_uuid_list_var("STAFF_ROLE_IDS")?,
            notify_target_user: env::var("NOTIFY_TARGET_USER")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            platform_timeout_secs: env::var("PLATFORM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            platform_base_url: "http://localhost:9999".into(),
            bot_token: "test-token".into(),
            application_id: Uuid::nil(),
            event_signing_secret: "test-signing-secret".into(),
            control_guild_id: Uuid::nil(),
            log_channel_id: Uuid::nil(),
            target_guild_ids: Vec::new(),
            staff_role_ids: Vec::new(),
            notify_target_user: false,
            platform_timeout_secs: 10,
        }
    }
}

/// Read and parse a required UUID environment variable.
fn parse_uuid_var(name: &str) -> Result<Uuid> {
    let raw = env::var(name).with_context(|| format!("{name} must be set"))?;
    raw.parse()
        .with_context(|| format!("{name} is not a valid UUID: {raw}"))
}

/// Read and parse a required comma-separated UUID list, preserving order.
///
/// The list may be empty; startup logs a warning in that case but the relay
/// still runs (an empty target list simply makes every fan-out a no-op).
fn parse_uuid_list_var(name: &str) -> Result<Vec<Uuid>> {
    let raw = env::var(name).with_context(|| format!("{name} must be set"))?;
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .with_context(|| format!("{name} contains an invalid UUID: {s}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_list_preserves_order_and_skips_blanks() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let key = format!("WARDEN_TEST_LIST_{}", Uuid::new_v4().simple());
        env::set_var(&key, format!(" {a}, ,{b},"));

        let parsed = parse_uuid_list_var(&key).unwrap();
        assert_eq!(parsed, vec![a, b]);

        env::remove_var(&key);
    }

    #[test]
    fn uuid_list_rejects_garbage() {
        let key = format!("WARDEN_TEST_LIST_{}", Uuid::new_v4().simple());
        env::set_var(&key, "not-a-uuid");
        assert!(parse_uuid_list_var(&key).is_err());
        env::remove_var(&key);
    }
}
