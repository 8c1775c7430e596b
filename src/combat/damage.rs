//! Damage resolution: weapon table lookup plus hand armor trim
//!
//! Reductions are whole percentages applied in integer arithmetic, so the
//! floor is exact: floor(45 * 0.96) is 43, never 43.19 rounded.

use serde::{Deserialize, Serialize};

use crate::combat::armor::ArmorLevel;
use crate::combat::body_part::BodyPart;
use crate::combat::constants::{
    HAND_REDUCTION_HEAVY_PCT, HAND_REDUCTION_LIGHT_PCT, HAND_REDUCTION_MEDIUM_PCT,
    HAND_REDUCTION_NONE_PCT,
};
use crate::combat::phase::AttackMode;
use crate::combat::weapons::WeaponProfile;

/// Damage reduction granted by hand armor, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HandArmorReduction {
    pub none: u32,
    pub light: u32,
    pub medium: u32,
    pub heavy: u32,
}

impl Default for HandArmorReduction {
    fn default() -> Self {
        Self {
            none: HAND_REDUCTION_NONE_PCT,
            light: HAND_REDUCTION_LIGHT_PCT,
            medium: HAND_REDUCTION_MEDIUM_PCT,
            heavy: HAND_REDUCTION_HEAVY_PCT,
        }
    }
}

impl HandArmorReduction {
    pub fn percent(&self, hand_armor: ArmorLevel) -> u32 {
        match hand_armor {
            ArmorLevel::None => self.none,
            ArmorLevel::Light => self.light,
            ArmorLevel::Medium => self.medium,
            ArmorLevel::Heavy => self.heavy,
        }
    }

    /// floor(raw * (1 - reduction))
    pub fn apply(&self, raw: i32, hand_armor: ArmorLevel) -> i32 {
        let kept = 100 - i64::from(self.percent(hand_armor).min(100));
        (i64::from(raw) * kept).div_euclid(100) as i32
    }
}

/// Damage for a strike with explicit reduction values
pub fn resolve_damage_with(
    reduction: &HandArmorReduction,
    weapon: &WeaponProfile,
    mode: AttackMode,
    part: BodyPart,
    part_armor: ArmorLevel,
    hand_armor: ArmorLevel,
) -> i32 {
    let raw = weapon.table(mode).raw(part, part_armor);
    reduction.apply(raw, hand_armor)
}

/// Damage for a strike with the default hand armor reductions
pub fn resolve_damage(
    weapon: &WeaponProfile,
    is_stab: bool,
    part: BodyPart,
    part_armor: ArmorLevel,
    hand_armor: ArmorLevel,
) -> i32 {
    let mode = if is_stab {
        AttackMode::Stab
    } else {
        AttackMode::Swing
    };
    resolve_damage_with(
        &HandArmorReduction::default(),
        weapon,
        mode,
        part,
        part_armor,
        hand_armor,
    )
}
