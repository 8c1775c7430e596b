//! Combatant action state machine
//!
//! Each combatant runs two independent channels: attack and defense. The
//! animation layer considers an entity "in" a state until it has fully left
//! it, so the only phase that counts for blocking and damage is `Active`.
//! Windup and the resolved tails are visible through `phase()` but never
//! through the `is_*_from` predicates.

use serde::{Deserialize, Serialize};

use crate::combat::direction::Direction;
use crate::combat::outcome::BounceReason;

/// Generic phase of either channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CombatPhase {
    #[default]
    Idle,
    Windup,
    Active,
    Resolved,
}

/// Attack mode, selects the damage sub-table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackMode {
    #[default]
    Swing,
    Stab,
}

impl AttackMode {
    pub fn is_stab(self) -> bool {
        matches!(self, AttackMode::Stab)
    }
}

/// Attack channel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackState {
    #[default]
    Idle,
    /// Drawing back, not yet dangerous
    Windup { direction: Direction, mode: AttackMode },
    /// Blade in motion; the only state that can hit
    Active { direction: Direction, mode: AttackMode },
    /// Strike finished, either connected or swung through
    ReleasedCleanly { direction: Direction, mode: AttackMode },
    /// Strike stopped short
    Bounced {
        direction: Direction,
        mode: AttackMode,
        reason: BounceReason,
    },
}

/// Events that move the attack channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackTrigger {
    /// Attack button held with a chosen direction
    Press { direction: Direction, mode: AttackMode },
    /// Attack button released, strike begins
    Release,
    /// Windup abandoned (feint)
    Cancel,
    /// Strike landed on a target
    Connect,
    /// Strike animation ran out without contact
    Expire,
    /// Strike stopped by a guard, ally or obstacle
    Bounce(BounceReason),
    /// Recovery animation fully exited
    Recover,
}

impl AttackState {
    pub fn phase(&self) -> CombatPhase {
        match self {
            AttackState::Idle => CombatPhase::Idle,
            AttackState::Windup { .. } => CombatPhase::Windup,
            AttackState::Active { .. } => CombatPhase::Active,
            AttackState::ReleasedCleanly { .. } | AttackState::Bounced { .. } => {
                CombatPhase::Resolved
            }
        }
    }

    /// Apply a trigger to get the next state
    pub fn apply(self, trigger: AttackTrigger) -> AttackState {
        use AttackState::*;
        use AttackTrigger::*;

        match (self, trigger) {
            // Aiming, including re-aiming during windup
            (Idle, Press { direction, mode }) | (Windup { .. }, Press { direction, mode }) => {
                Windup { direction, mode }
            }
            (Windup { direction, mode }, Release) => Active { direction, mode },
            (Windup { .. }, Cancel) => Idle,

            // Strike outcomes
            (Active { direction, mode }, Connect) | (Active { direction, mode }, Expire) => {
                ReleasedCleanly { direction, mode }
            }
            (Active { direction, mode }, Bounce(reason)) => Bounced {
                direction,
                mode,
                reason,
            },

            // Back to rest
            (ReleasedCleanly { .. }, Recover) | (Bounced { .. }, Recover) => Idle,

            // No change for invalid transitions
            (current, _) => current,
        }
    }
}

/// Defense channel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DefenseState {
    #[default]
    Idle,
    /// Guard moving into place
    Windup { direction: Direction },
    /// Guard set; the only state that can block
    Active { direction: Direction },
    /// Guard just absorbed a strike
    Blocked { direction: Direction },
}

/// Events that move the defense channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefenseTrigger {
    /// Defend button held with a chosen direction
    Raise(Direction),
    /// Guard animation reached its hold pose
    Settle,
    /// Guard stopped a strike
    Absorb,
    /// Defend button released
    Lower,
    /// Block recoil fully exited
    Recover,
}

impl DefenseState {
    pub fn phase(&self) -> CombatPhase {
        match self {
            DefenseState::Idle => CombatPhase::Idle,
            DefenseState::Windup { .. } => CombatPhase::Windup,
            DefenseState::Active { .. } => CombatPhase::Active,
            DefenseState::Blocked { .. } => CombatPhase::Resolved,
        }
    }

    /// Apply a trigger to get the next state
    pub fn apply(self, trigger: DefenseTrigger) -> DefenseState {
        use DefenseState::*;
        use DefenseTrigger::*;

        match (self, trigger) {
            (Idle, Raise(direction)) | (Windup { .. }, Raise(direction)) => Windup { direction },
            // Holding the same guard is a no-op; switching sides has to wind up again
            (Active { direction: held }, Raise(direction)) if held == direction => self,
            (Active { .. }, Raise(direction)) => Windup { direction },
            (Windup { direction }, Settle) => Active { direction },
            (Active { direction }, Absorb) => Blocked { direction },
            (Windup { .. }, Lower) | (Active { .. }, Lower) => Idle,
            (Blocked { .. }, Recover) => Idle,

            (current, _) => current,
        }
    }
}

/// Both channels of one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ActionState {
    pub attack: AttackState,
    pub defense: DefenseState,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attack_phase(&self) -> CombatPhase {
        self.attack.phase()
    }

    pub fn defense_phase(&self) -> CombatPhase {
        self.defense.phase()
    }

    /// True only while the strike is live and coming from `direction`
    pub fn is_attacking_from(&self, direction: Direction) -> bool {
        matches!(self.attack, AttackState::Active { direction: d, .. } if d == direction)
    }

    /// True only while the guard is set on `direction`
    pub fn is_defending_from(&self, direction: Direction) -> bool {
        matches!(self.defense, DefenseState::Active { direction: d } if d == direction)
    }

    pub fn is_attacking(&self) -> bool {
        self.active_attack().is_some()
    }

    pub fn is_defending(&self) -> bool {
        self.active_guard().is_some()
    }

    /// Direction and mode of the live strike, if any
    pub fn active_attack(&self) -> Option<(Direction, AttackMode)> {
        match self.attack {
            AttackState::Active { direction, mode } => Some((direction, mode)),
            _ => None,
        }
    }

    /// Direction of the set guard, if any
    pub fn active_guard(&self) -> Option<Direction> {
        match self.defense {
            DefenseState::Active { direction } => Some(direction),
            _ => None,
        }
    }

    /// Feed the attack channel; returns whether the state changed
    pub fn trigger_attack(&mut self, trigger: AttackTrigger) -> bool {
        let next = self.attack.apply(trigger);
        if next == self.attack {
            tracing::trace!(state = ?self.attack, ?trigger, "attack trigger ignored");
            return false;
        }
        self.attack = next;
        true
    }

    /// Feed the defense channel; returns whether the state changed
    pub fn trigger_defense(&mut self, trigger: DefenseTrigger) -> bool {
        let next = self.defense.apply(trigger);
        if next == self.defense {
            tracing::trace!(state = ?self.defense, ?trigger, "defense trigger ignored");
            return false;
        }
        self.defense = next;
        true
    }
}
