//! Confirm-Button Token
//!
//! The pending card's Confirm button carries the full action as a typed
//! payload: JSON, base64url-encoded, behind a `confirm:` prefix in the
//! component `custom_id`. The confirmation handler decodes the button it
//! receives instead of re-parsing rendered card text, so reasons and
//! nicknames round-trip exactly.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::types::ModAction;

/// `custom_id` prefix identifying a Confirm button.
pub const CONFIRM_PREFIX: &str = "confirm:";

/// `custom_id` of every Cancel button.
pub const CANCEL_ID: &str = "cancel";

/// Platform limit on component `custom_id` length, in bytes.
pub const MAX_CUSTOM_ID_LEN: usize = 256;

/// Errors from token encoding/decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The encoded token would exceed [`MAX_CUSTOM_ID_LEN`].
    #[error("Confirm token exceeds {MAX_CUSTOM_ID_LEN} bytes")]
    TooLarge,
    /// The `custom_id` is not a well-formed confirm token.
    #[error("Malformed confirm token")]
    Malformed,
}

/// The typed payload carried by a Confirm button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionToken {
    pub action: ModAction,
    pub target_user_id: Uuid,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl ActionToken {
    /// Encode into a Confirm-button `custom_id`.
    pub fn encode(&self) -> Result<String, TokenError> {
        let json = serde_json::to_vec(self).map_err(|_| TokenError::Malformed)?;
        let custom_id = format!("{CONFIRM_PREFIX}{}", URL_SAFE_NO_PAD.encode(json));
        if custom_id.len() > MAX_CUSTOM_ID_LEN {
            return Err(TokenError::TooLarge);
        }
        Ok(custom_id)
    }

    /// Decode from a Confirm-button `custom_id`.
    pub fn decode(custom_id: &str) -> Result<Self, TokenError> {
        let encoded = custom_id
            .strip_prefix(CONFIRM_PREFIX)
            .ok_or(TokenError::Malformed)?;
        let json = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TokenError::Malformed)?;
        serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(reason: &str, nickname: Option<&str>) -> ActionToken {
        ActionToken {
            action: ModAction::GlobalBan,
            target_user_id: Uuid::new_v4(),
            reason: reason.to_string(),
            nickname: nickname.map(String::from),
        }
    }

    #[test]
    fn round_trips_exactly() {
        for original in [
            token("spam", None),
            token("reason with spaces, colons: and_underscores", None),
            token("ünïcødé — 理由", Some("Bøb")),
            token("", Some("Bob")),
        ] {
            let decoded = ActionToken::decode(&original.encode().unwrap()).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn rejects_oversized_reason() {
        let huge = token(&"x".repeat(500), None);
        assert_eq!(huge.encode(), Err(TokenError::TooLarge));
    }

    #[test]
    fn rejects_foreign_custom_ids() {
        assert_eq!(ActionToken::decode(CANCEL_ID), Err(TokenError::Malformed));
        assert_eq!(
            ActionToken::decode("confirm:!!not-base64!!"),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            ActionToken::decode(&format!("{CONFIRM_PREFIX}{}", URL_SAFE_NO_PAD.encode("{}"))),
            Err(TokenError::Malformed)
        );
    }
}
