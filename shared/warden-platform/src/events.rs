//! Bot Event Types & Delivery Envelope
//!
//! Events are delivered to bot applications as CloudEvents 1.0 envelopes,
//! signed with HMAC-SHA256 (see [`crate::signing`]).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signature header carried on every event delivery (`sha256=<hex>`).
pub const SIGNATURE_HEADER: &str = "x-webhook-signature";

/// Event type header (dot-form name, e.g. `command.invoked`).
pub const EVENT_TYPE_HEADER: &str = "x-webhook-event";

/// Unique delivery id header.
pub const EVENT_ID_HEADER: &str = "x-webhook-id";

/// Unix-seconds timestamp header, used for replay rejection.
pub const TIMESTAMP_HEADER: &str = "x-webhook-timestamp";

/// Bot event types delivered over the event webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotEventType {
    /// A slash command was invoked.
    #[serde(rename = "command.invoked")]
    CommandInvoked,
    /// A message component (button) was pressed.
    #[serde(rename = "interaction.component")]
    ComponentInteraction,
}

impl BotEventType {
    /// Parse from the dot-separated string form (e.g. `"command.invoked"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "command.invoked" => Some(Self::CommandInvoked),
            "interaction.component" => Some(Self::ComponentInteraction),
            _ => None,
        }
    }

    /// Convert to the dot-separated string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommandInvoked => "command.invoked",
            Self::ComponentInteraction => "interaction.component",
        }
    }
}

impl std::fmt::Display for BotEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CloudEvents 1.0 envelope wrapping every delivered event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// CloudEvents spec version (always `"1.0"`).
    pub specversion: String,
    /// Event type in dot form (`command.invoked`, ...).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Originating platform identifier.
    pub source: String,
    /// Unique event id.
    pub id: Uuid,
    /// Event time.
    pub time: DateTime<Utc>,
    /// Event payload; shape depends on `event_type`.
    pub data: serde_json::Value,
}

/// Payload of a `command.invoked` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInvoked {
    /// Unique interaction id for this invocation; used to respond.
    pub interaction_id: Uuid,
    /// Invoked command name.
    pub command_name: String,
    /// Guild the command was invoked in (`None` for DM commands).
    pub guild_id: Option<Uuid>,
    /// Channel the command was invoked in.
    pub channel_id: Uuid,
    /// Invoking user.
    pub user_id: Uuid,
    /// Role ids held by the invoker in that guild.
    #[serde(default)]
    pub member_roles: Vec<Uuid>,
    /// Resolved option values keyed by option name.
    #[serde(default)]
    pub options: HashMap<String, String>,
}

/// Payload of an `interaction.component` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInteraction {
    /// Unique interaction id for this press; used to respond.
    pub interaction_id: Uuid,
    /// The `custom_id` of the pressed component.
    pub custom_id: String,
    /// Message the component is attached to.
    pub message_id: Uuid,
    /// Channel containing the message.
    pub channel_id: Uuid,
    /// Guild containing the channel (`None` in DMs).
    pub guild_id: Option<Uuid>,
    /// Pressing user.
    pub user_id: Uuid,
    /// Role ids held by the presser in that guild.
    #[serde(default)]
    pub member_roles: Vec<Uuid>,
}
