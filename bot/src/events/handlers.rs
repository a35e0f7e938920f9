//! Event Delivery Handler
//!
//! Verifies the delivery signature over the raw body, rejects stale
//! deliveries, decodes the CloudEvents envelope, and dispatches to the
//! request or confirmation handler. Event types the relay does not handle
//! are acknowledged and dropped.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::debug;
use warden_platform::signing;
use warden_platform::{BotEventType, EventEnvelope, SIGNATURE_HEADER, TIMESTAMP_HEADER};

use crate::actions::{confirm, request};
use crate::api::AppState;

use super::EventError;

/// Maximum accepted delivery timestamp skew, in seconds.
const MAX_TIMESTAMP_SKEW_SECS: i64 = 300;

/// POST /events
/// Signed platform event delivery.
pub async fn receive_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, EventError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(EventError::InvalidSignature)?;
    if !signing::verify(&state.config.event_signing_secret, &body, signature) {
        return Err(EventError::InvalidSignature);
    }

    let timestamp: i64 = headers
        .get(TIMESTAMP_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .ok_or(EventError::StaleTimestamp)?;
    if (Utc::now().timestamp() - timestamp).abs() > MAX_TIMESTAMP_SKEW_SECS {
        return Err(EventError::StaleTimestamp);
    }

    let envelope: EventEnvelope =
        serde_json::from_slice(&body).map_err(|e| EventError::Malformed(e.to_string()))?;

    let Some(event_type) = BotEventType::parse_str(&envelope.event_type) else {
        debug!(event_type = %envelope.event_type, "Ignoring unhandled event type");
        return Ok(StatusCode::NO_CONTENT);
    };

    match event_type {
        BotEventType::CommandInvoked => {
            request::handle(&state, decode_payload(envelope.data)?).await?;
        }
        BotEventType::ComponentInteraction => {
            confirm::handle(&state, decode_payload(envelope.data)?).await?;
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn decode_payload<T: DeserializeOwned>(data: serde_json::Value) -> Result<T, EventError> {
    serde_json::from_value(data).map_err(|e| EventError::Malformed(e.to_string()))
}
