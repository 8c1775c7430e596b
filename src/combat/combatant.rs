//! Combatant component: pose, side, loadout and action state

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::combat::armor::ArmorLoadout;
use crate::combat::constants::DEFAULT_HEALTH;
use crate::combat::geometry::planar;
use crate::combat::outcome::CombatOutcome;
use crate::combat::phase::ActionState;
use crate::combat::weapons::WeaponProfile;
use crate::core::types::{CombatantId, Side};

/// World transform snapshot (y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    /// Ground-plane position
    pub fn planar_position(&self) -> Vec2 {
        planar(self.position)
    }

    /// Ground-plane facing
    pub fn planar_forward(&self) -> Vec2 {
        planar(self.forward)
    }
}

/// A participant in melee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub side: Side,
    pub pose: Pose,
    pub health: i32,
    pub weapon: WeaponProfile,
    pub armor: ArmorLoadout,
    pub actions: ActionState,
}

impl Combatant {
    pub fn new(id: CombatantId, side: Side, weapon: WeaponProfile) -> Self {
        Self {
            id,
            side,
            pose: Pose::default(),
            health: DEFAULT_HEALTH,
            weapon,
            armor: ArmorLoadout::default(),
            actions: ActionState::default(),
        }
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn with_armor(mut self, armor: ArmorLoadout) -> Self {
        self.armor = armor;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_ally_of(&self, other: &Combatant) -> bool {
        self.side == other.side
    }

    /// Apply a landed strike to health (clamped at zero).
    ///
    /// Returns true if this outcome killed the combatant. Resolution never
    /// calls this; it is for the health collaborator.
    pub fn apply_outcome(&mut self, outcome: &CombatOutcome) -> bool {
        if !outcome.is_hit() || self.is_dead() {
            return false;
        }
        self.health = self.health.saturating_sub(outcome.damage()).max(0);
        self.is_dead()
    }
}
