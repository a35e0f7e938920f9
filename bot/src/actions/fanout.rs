//! Fan-out Engine
//!
//! Replays one confirmed action across the target guilds sequentially, in
//! configured order. Execution is best-effort with an outcome report: a
//! failure on one guild never aborts, rolls back, or reorders the rest.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::platform::{PlatformClient, PlatformError};

use super::token::ActionToken;
use super::types::ModAction;

/// What happened on a single target guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation was applied.
    Applied,
    /// The guild was skipped (target not a member / not banned there).
    Skipped(&'static str),
    /// The call failed.
    Failed(String),
}

/// Per-guild fan-out result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildOutcome {
    pub guild_id: Uuid,
    pub outcome: Outcome,
}

/// Replay `token` across `targets` in order, collecting per-guild outcomes.
pub async fn execute(
    platform: &PlatformClient,
    targets: &[Uuid],
    token: &ActionToken,
) -> Vec<GuildOutcome> {
    let mut outcomes = Vec::with_capacity(targets.len());

    for &guild_id in targets {
        let outcome = apply_to_guild(platform, guild_id, token).await;

        match &outcome {
            Outcome::Applied => {
                debug!(%guild_id, action = %token.action, user_id = %token.target_user_id, "Action applied");
            }
            Outcome::Skipped(reason) => {
                debug!(%guild_id, action = %token.action, user_id = %token.target_user_id, reason, "Guild skipped");
            }
            Outcome::Failed(error) => {
                warn!(%guild_id, action = %token.action, user_id = %token.target_user_id, error, "Action failed on guild");
            }
        }

        outcomes.push(GuildOutcome { guild_id, outcome });
    }

    outcomes
}

/// Apply one action to one guild.
///
/// Every action probes membership first (one probe per guild); the probe's
/// result is ignored for unban, which operates on the ban list instead.
async fn apply_to_guild(
    platform: &PlatformClient,
    guild_id: Uuid,
    token: &ActionToken,
) -> Outcome {
    let user_id = token.target_user_id;
    let membership = platform.get_member(guild_id, user_id).await;

    if token.action.requires_membership() {
        match membership {
            Ok(_) => {}
            Err(err) if err.is_not_found() => return Outcome::Skipped("not a member"),
            Err(err) => return Outcome::Failed(format!("membership lookup: {err}")),
        }
    }

    let result = match token.action {
        ModAction::GlobalBan => platform.create_ban(guild_id, user_id, &token.reason).await,
        ModAction::GlobalKick => platform.kick_member(guild_id, user_id, &token.reason).await,
        ModAction::GlobalNick => {
            let nickname = token.nickname.as_deref().unwrap_or_default();
            platform.set_nickname(guild_id, user_id, nickname).await
        }
        ModAction::GlobalUnban => match platform.remove_ban(guild_id, user_id).await {
            Err(PlatformError::NotFound) => return Outcome::Skipped("not banned"),
            other => other,
        },
    };

    match result {
        Ok(()) => Outcome::Applied,
        Err(err) => Outcome::Failed(err.to_string()),
    }
}

/// Tally of a fan-out's outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Count outcomes by kind.
#[must_use]
pub fn tally(outcomes: &[GuildOutcome]) -> OutcomeTally {
    outcomes.iter().fold(OutcomeTally::default(), |mut acc, o| {
        match o.outcome {
            Outcome::Applied => acc.applied += 1,
            Outcome::Skipped(_) => acc.skipped += 1,
            Outcome::Failed(_) => acc.failed += 1,
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_kind() {
        let outcomes = vec![
            GuildOutcome {
                guild_id: Uuid::new_v4(),
                outcome: Outcome::Applied,
            },
            GuildOutcome {
                guild_id: Uuid::new_v4(),
                outcome: Outcome::Skipped("not a member"),
            },
            GuildOutcome {
                guild_id: Uuid::new_v4(),
                outcome: Outcome::Applied,
            },
        ];

        let counts = tally(&outcomes);
        assert_eq!(counts.applied, 2);
        assert_eq!(counts.skipped, 1);
        assert_eq!(counts.failed, 0);
    }
}
