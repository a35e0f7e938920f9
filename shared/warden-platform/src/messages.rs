//! REST Request & Response Bodies
//!
//! Bodies for the platform endpoints the relay calls: channel messages,
//! direct messages, interaction responses, and guild moderation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::embed::{ActionRow, Embed};

/// Request body for `POST /api/channels/{id}/messages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// Plain-text content (mentions included).
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
}

/// Response body for a created message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreated {
    pub id: Uuid,
    pub channel_id: Uuid,
}

/// Request body for `POST /api/interactions/{id}/response`.
///
/// `ChannelMessage` posts a reply visible per `ephemeral`; `UpdateMessage`
/// replaces the content, embeds, and components of the message the
/// interaction originated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionResponse {
    ChannelMessage {
        content: String,
        ephemeral: bool,
    },
    UpdateMessage {
        content: String,
        embeds: Vec<Embed>,
        components: Vec<ActionRow>,
    },
}

impl InteractionResponse {
    /// An ephemeral reply, visible only to the interacting user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::ChannelMessage {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// Request body for `POST /api/dm` (get or create a DM channel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDmRequest {
    pub recipient_id: Uuid,
}

/// Response body for a DM channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmChannel {
    pub channel_id: Uuid,
}

/// Response body for `GET /api/guilds/{guild_id}/members/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildMember {
    pub user_id: Uuid,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub roles: Vec<Uuid>,
}

/// Request body for `PUT /api/guilds/{guild_id}/bans/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBanRequest {
    pub reason: String,
}

/// Request body for `PATCH /api/guilds/{guild_id}/members/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub nickname: String,
}
