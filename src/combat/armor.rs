//! Armor levels and per-slot loadouts
//!
//! Each body slot carries one ordered armor level. Hand armor never feeds the
//! per-part lookup; it only trims the final damage.

use serde::{Deserialize, Serialize};

use crate::combat::body_part::BodyPart;

/// How heavily a slot is armored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ArmorLevel {
    /// Bare skin or cloth
    #[default]
    None,
    /// Leather, padded cloth
    Light,
    /// Mail
    Medium,
    /// Plate
    Heavy,
}

impl ArmorLevel {
    /// Returns all levels, lightest first
    pub fn all() -> [ArmorLevel; 4] {
        [
            ArmorLevel::None,
            ArmorLevel::Light,
            ArmorLevel::Medium,
            ArmorLevel::Heavy,
        ]
    }

    /// Table index
    pub fn index(self) -> usize {
        match self {
            ArmorLevel::None => 0,
            ArmorLevel::Light => 1,
            ArmorLevel::Medium => 2,
            ArmorLevel::Heavy => 3,
        }
    }
}

/// Armor worn on each slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ArmorLoadout {
    pub head: ArmorLevel,
    pub torso: ArmorLevel,
    pub hand: ArmorLevel,
    pub legs: ArmorLevel,
}

impl ArmorLoadout {
    /// No armor at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Same level on every slot
    pub fn uniform(level: ArmorLevel) -> Self {
        Self {
            head: level,
            torso: level,
            hand: level,
            legs: level,
        }
    }

    /// Armor covering the struck part
    pub fn for_part(&self, part: BodyPart) -> ArmorLevel {
        match part {
            BodyPart::Head => self.head,
            BodyPart::Torso => self.torso,
            BodyPart::Legs => self.legs,
        }
    }
}
