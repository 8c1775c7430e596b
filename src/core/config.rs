//! Combat rule configuration
//!
//! Defaults reproduce the tuned values. Data files may override them through
//! a `[rules]` table; `validate` runs before anything reaches resolution.

use serde::{Deserialize, Serialize};

use crate::combat::damage::HandArmorReduction;
use crate::combat::geometry::SectorArcs;

/// Configuration for combat resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CombatConfig {
    /// Sector boundaries around the defender
    pub arcs: SectorArcs,
    /// Damage trimmed off by hand armor
    pub hand_armor_reduction: HandArmorReduction,
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        let arcs = &self.arcs;
        if !(arcs.front_half_arc > 0.0 && arcs.front_half_arc < arcs.flank_outer_arc) {
            return Err(format!(
                "front_half_arc ({}) must be positive and below flank_outer_arc ({})",
                arcs.front_half_arc, arcs.flank_outer_arc
            ));
        }
        if arcs.flank_outer_arc >= 180.0 {
            return Err(format!(
                "flank_outer_arc ({}) must leave a rear arc (< 180)",
                arcs.flank_outer_arc
            ));
        }

        let hands = &self.hand_armor_reduction;
        let levels = [hands.none, hands.light, hands.medium, hands.heavy];
        if levels.iter().any(|&pct| pct > 100) {
            return Err("Hand armor reduction cannot exceed 100%".into());
        }
        if levels.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err("Hand armor reduction must not decrease with heavier armor".into());
        }

        Ok(())
    }
}
