//! Result of a single weapon contact

use serde::{Deserialize, Serialize};

use crate::combat::direction::Direction;

/// Why a strike stopped short
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BounceReason {
    /// Target is an ally or already down
    FriendlyFire,
    /// Target's guard stopped the blade
    Blocked,
    /// Blade struck level geometry
    Obstacle,
    /// Contact arrived outside the attacker's active strike
    NotStriking,
}

/// Decision handed back to the collision handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// Strike landed; apply damage and play the reaction
    NotBlocked { damage: i32, reaction: Direction },
    /// Defender's guard held
    Blocked,
    /// Strike failed to connect meaningfully
    Bounced(BounceReason),
}

/// Sound/animation category for collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCue {
    /// Blade meets body
    Flesh,
    /// Blade meets guard
    Guard,
    /// Blade glances off
    Deflect,
}

impl CombatOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, CombatOutcome::NotBlocked { .. })
    }

    /// Damage dealt, zero unless the strike landed
    pub fn damage(&self) -> i32 {
        match self {
            CombatOutcome::NotBlocked { damage, .. } => *damage,
            _ => 0,
        }
    }

    pub fn reaction(&self) -> Option<Direction> {
        match self {
            CombatOutcome::NotBlocked { reaction, .. } => Some(*reaction),
            _ => None,
        }
    }

    pub fn cue(&self) -> OutcomeCue {
        match self {
            CombatOutcome::NotBlocked { .. } => OutcomeCue::Flesh,
            CombatOutcome::Blocked => OutcomeCue::Guard,
            CombatOutcome::Bounced(_) => OutcomeCue::Deflect,
        }
    }
}
