//! Action Types

use serde::{Deserialize, Serialize};

/// The four relayed moderation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModAction {
    GlobalBan,
    GlobalKick,
    GlobalNick,
    GlobalUnban,
}

impl ModAction {
    /// Resolve a slash-command name to its action.
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "globalban" => Some(Self::GlobalBan),
            "globalkick" => Some(Self::GlobalKick),
            "globalnick" => Some(Self::GlobalNick),
            "globalunban" => Some(Self::GlobalUnban),
            _ => None,
        }
    }

    /// The slash-command name this action is invoked as.
    pub const fn command_name(&self) -> &'static str {
        match self {
            Self::GlobalBan => "globalban",
            Self::GlobalKick => "globalkick",
            Self::GlobalNick => "globalnick",
            Self::GlobalUnban => "globalunban",
        }
    }

    /// Human-readable name used on cards.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GlobalBan => "Global Ban",
            Self::GlobalKick => "Global Kick",
            Self::GlobalNick => "Global Nickname",
            Self::GlobalUnban => "Global Unban",
        }
    }

    /// Whether the target must be a member of a guild for the action to
    /// apply there. Unban operates on the ban list, not the member list.
    pub const fn requires_membership(&self) -> bool {
        !matches!(self, Self::GlobalUnban)
    }
}

impl std::fmt::Display for ModAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_round_trip() {
        for action in [
            ModAction::GlobalBan,
            ModAction::GlobalKick,
            ModAction::GlobalNick,
            ModAction::GlobalUnban,
        ] {
            assert_eq!(ModAction::from_command(action.command_name()), Some(action));
        }
        assert_eq!(ModAction::from_command("globalmute"), None);
    }

    #[test]
    fn only_unban_skips_the_membership_gate() {
        assert!(ModAction::GlobalBan.requires_membership());
        assert!(ModAction::GlobalKick.requires_membership());
        assert!(ModAction::GlobalNick.requires_membership());
        assert!(!ModAction::GlobalUnban.requires_membership());
    }
}
