//! REST client for the platform API.
//!
//! All calls carry the bot token as a bearer credential and the configured
//! per-call timeout. Non-success statuses are classified into
//! [`PlatformError`]; the body's `message` field is surfaced when present.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use warden_platform::{
    CommandData, CreateBanRequest, CreateDmRequest, CreateMessageRequest, DmChannel, GuildMember,
    InteractionResponse, MessageCreated, RegisterCommandsRequest, UpdateMemberRequest,
};

use super::PlatformError;

/// Client for the platform's bot-facing REST API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl PlatformClient {
    /// Build a client against `base_url` with the given bearer token.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Replace the application's registered slash commands.
    pub async fn register_commands(
        &self,
        application_id: Uuid,
        commands: Vec<CommandData>,
    ) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/applications/{application_id}/commands"));
        let body = RegisterCommandsRequest { commands };
        let resp = self.http.put(url).bearer_auth(&self.token).json(&body).send().await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Respond to an interaction (ephemeral reply or card update).
    pub async fn respond(
        &self,
        interaction_id: Uuid,
        response: &InteractionResponse,
    ) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/interactions/{interaction_id}/response"));
        let resp = self.http.post(url).bearer_auth(&self.token).json(response).send().await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Post a message to a channel.
    pub async fn create_message(
        &self,
        channel_id: Uuid,
        message: &CreateMessageRequest,
    ) -> Result<MessageCreated, PlatformError> {
        let url = self.url(&format!("/api/channels/{channel_id}/messages"));
        let resp = self.http.post(url).bearer_auth(&self.token).json(message).send().await?;
        Self::json_body(Self::expect_success(resp).await?).await
    }

    /// Fetch a user's membership in a guild. 404 means not a member.
    pub async fn get_member(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
    ) -> Result<GuildMember, PlatformError> {
        let url = self.url(&format!("/api/guilds/{guild_id}/members/{user_id}"));
        let resp = self.http.get(url).bearer_auth(&self.token).send().await?;
        Self::json_body(Self::expect_success(resp).await?).await
    }

    /// Ban a user from a guild.
    pub async fn create_ban(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        reason: &str,
    ) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/guilds/{guild_id}/bans/{user_id}"));
        let body = CreateBanRequest {
            reason: reason.to_string(),
        };
        let resp = self.http.put(url).bearer_auth(&self.token).json(&body).send().await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Lift a user's ban in a guild. 404 means the user was not banned.
    pub async fn remove_ban(&self, guild_id: Uuid, user_id: Uuid) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/guilds/{guild_id}/bans/{user_id}"));
        let resp = self.http.delete(url).bearer_auth(&self.token).send().await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Remove a user from a guild.
    pub async fn kick_member(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        reason: &str,
    ) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/guilds/{guild_id}/members/{user_id}"));
        let resp = self
            .http
            .delete(url)
            .bearer_auth(&self.token)
            .query(&[("reason", reason)])
            .send()
            .await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Set a user's nickname in a guild.
    pub async fn set_nickname(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        nickname: &str,
    ) -> Result<(), PlatformError> {
        let url = self.url(&format!("/api/guilds/{guild_id}/members/{user_id}"));
        let body = UpdateMemberRequest {
            nickname: nickname.to_string(),
        };
        let resp = self.http.patch(url).bearer_auth(&self.token).json(&body).send().await?;
        Self::expect_success(resp).await.map(drop)
    }

    /// Get or create a DM channel with a user.
    pub async fn open_dm(&self, recipient_id: Uuid) -> Result<DmChannel, PlatformError> {
        let url = self.url("/api/dm");
        let body = CreateDmRequest { recipient_id };
        let resp = self.http.post(url).bearer_auth(&self.token).json(&body).send().await?;
        Self::json_body(Self::expect_success(resp).await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Classify a response's status, returning the response only on success.
    async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, PlatformError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        match status {
            StatusCode::NOT_FOUND => Err(PlatformError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(PlatformError::RateLimited),
            _ => {
                let message = resp
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
                Err(PlatformError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn json_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, PlatformError> {
        Ok(resp.json().await?)
    }
}
