//! Weapon profiles for table-driven damage
//!
//! A weapon carries two damage tables, one per attack mode. Each table is
//! body part by armor level, fully populated by construction.

use serde::{Deserialize, Serialize};

use crate::combat::armor::ArmorLevel;
use crate::combat::body_part::BodyPart;
use crate::combat::phase::AttackMode;

/// Raw damage by body part, each row ordered by ArmorLevel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageTable {
    pub head: [i32; 4],
    pub torso: [i32; 4],
    pub legs: [i32; 4],
}

impl DamageTable {
    /// Raw damage before hand armor
    pub fn raw(&self, part: BodyPart, armor: ArmorLevel) -> i32 {
        self.row(part)[armor.index()]
    }

    /// One row of the table
    pub fn row(&self, part: BodyPart) -> &[i32; 4] {
        match part {
            BodyPart::Head => &self.head,
            BodyPart::Torso => &self.torso,
            BodyPart::Legs => &self.legs,
        }
    }

    /// Every (part, armor, raw) entry, for validation
    pub fn entries(&self) -> impl Iterator<Item = (BodyPart, ArmorLevel, i32)> + '_ {
        BodyPart::all().into_iter().flat_map(move |part| {
            ArmorLevel::all()
                .into_iter()
                .map(move |armor| (part, armor, self.raw(part, armor)))
        })
    }
}

/// Complete weapon profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub name: String,
    /// Blade length; consumed by distance checks outside this crate
    pub reach: f32,
    pub swing: DamageTable,
    pub stab: DamageTable,
}

impl WeaponProfile {
    /// Table for an attack mode
    pub fn table(&self, mode: AttackMode) -> &DamageTable {
        match mode {
            AttackMode::Swing => &self.swing,
            AttackMode::Stab => &self.stab,
        }
    }

    /// Common weapon: Arming sword
    pub fn arming_sword() -> Self {
        Self {
            name: "arming_sword".to_string(),
            reach: 1.1,
            swing: DamageTable {
                head: [60, 48, 36, 20],
                torso: [30, 26, 21, 12],
                legs: [24, 19, 14, 8],
            },
            stab: DamageTable {
                head: [70, 55, 30, 12],
                torso: [40, 32, 22, 10],
                legs: [20, 16, 10, 5],
            },
        }
    }

    /// Common weapon: Spear
    pub fn spear() -> Self {
        Self {
            name: "spear".to_string(),
            reach: 2.4,
            swing: DamageTable {
                head: [35, 28, 18, 9],
                torso: [22, 17, 11, 6],
                legs: [18, 14, 9, 5],
            },
            stab: DamageTable {
                head: [80, 64, 44, 22],
                torso: [55, 46, 33, 18],
                legs: [26, 21, 15, 8],
            },
        }
    }

    /// Common weapon: Mace
    pub fn mace() -> Self {
        Self {
            name: "mace".to_string(),
            reach: 0.9,
            swing: DamageTable {
                head: [65, 60, 52, 40],
                torso: [38, 35, 30, 24],
                legs: [22, 20, 17, 14],
            },
            stab: DamageTable {
                head: [20, 18, 15, 10],
                torso: [12, 11, 9, 6],
                legs: [8, 7, 6, 4],
            },
        }
    }
}
