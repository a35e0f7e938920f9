//! Moderation Actions
//!
//! Request handling (slash command → pending card), confirmation handling
//! (button press → fan-out → result card), and the pieces they share:
//! action types, the confirm-button token, card rendering, the fan-out
//! engine, and the single-confirmation guard.

pub mod cards;
pub mod confirm;
pub mod fanout;
pub mod guard;
pub mod request;
pub mod token;
pub mod types;

use uuid::Uuid;

/// Whether a member holds any of the configured staff roles.
pub(crate) fn is_staff(member_roles: &[Uuid], staff_roles: &[Uuid]) -> bool {
    member_roles.iter().any(|role| staff_roles.contains(role))
}
