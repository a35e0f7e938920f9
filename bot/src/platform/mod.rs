//! Platform REST Client
//!
//! Outbound half of the bot protocol: command registration, messaging,
//! interaction responses, and guild moderation calls.

mod client;
mod error;

pub use client::PlatformClient;
pub use error::PlatformError;
