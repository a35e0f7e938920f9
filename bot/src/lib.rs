//! Warden
//!
//! Cross-guild moderation action relay: privileged slash commands invoked in
//! a control guild become confirmation cards in a log channel; confirmed
//! actions are replayed across the configured target guilds.

pub mod actions;
pub mod api;
pub mod config;
pub mod events;
pub mod platform;
pub mod registrar;
