//! Warden Platform Protocol
//!
//! Wire types shared between the relay service and its tests: bot event
//! envelopes, slash-command definitions, message embeds and components,
//! REST request/response bodies, and HMAC event signing.

pub mod commands;
pub mod embed;
pub mod events;
pub mod messages;
pub mod signing;

pub use commands::*;
pub use embed::*;
pub use events::*;
pub use messages::*;
