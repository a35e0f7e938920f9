//! Event Endpoint Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::platform::PlatformError;

/// Errors answered by the event endpoint.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Missing or failed signature verification. Fail closed.
    #[error("Invalid event signature")]
    InvalidSignature,

    /// Missing, unparsable, or out-of-window delivery timestamp.
    #[error("Stale or missing event timestamp")]
    StaleTimestamp,

    /// The body is not a well-formed event envelope or payload.
    #[error("Malformed event: {0}")]
    Malformed(String),

    /// A handler's outbound platform call failed.
    #[error("{0}")]
    Platform(#[from] PlatformError),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "invalid_signature",
                self.to_string(),
            ),
            Self::StaleTimestamp => (
                StatusCode::UNAUTHORIZED,
                "stale_timestamp",
                self.to_string(),
            ),
            Self::Malformed(msg) => (StatusCode::BAD_REQUEST, "malformed_event", msg.clone()),
            Self::Platform(err) => {
                tracing::error!("Platform call failed while handling event: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "platform_error",
                    "Upstream platform call failed".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": code, "message": message })),
        )
            .into_response()
    }
}
