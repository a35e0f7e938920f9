//! Single-Confirmation Guard
//!
//! Two staff members can press Confirm on the same card before it reaches a
//! terminal state. The guard makes the first press win: claiming a card
//! message id succeeds exactly once per process lifetime.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

/// Process-local set of cards whose confirmation has begun.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGuard {
    started: Arc<DashMap<Uuid, ()>>,
}

impl ConfirmationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a card for confirmation. Returns `true` only for the first
    /// caller; the card stays claimed afterwards, terminal states included.
    pub fn begin(&self, message_id: Uuid) -> bool {
        self.started.insert(message_id, ()).is_none()
    }
}
