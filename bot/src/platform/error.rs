//! Platform API Error Classification

use thiserror::Error;

/// Errors from outbound platform REST calls.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Connection, TLS, or timeout failure before an HTTP status was read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The addressed resource does not exist (HTTP 404).
    #[error("Not found")]
    NotFound,

    /// The platform throttled the call (HTTP 429).
    #[error("Rate limited")]
    RateLimited,

    /// Any other non-success response.
    #[error("Platform API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

impl PlatformError {
    /// Whether this error means the addressed resource is absent.
    ///
    /// The fan-out uses this to distinguish "user is not a member / not
    /// banned here" from genuine call failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
