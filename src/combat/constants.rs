//! Combat system constants - all tunable values in one place
//!
//! Damage reductions are whole percentages so truncation stays exact.

// Sector arcs (degrees from the defender's forward vector)
pub const FRONT_HALF_ARC_DEG: f32 = 60.0;
pub const FLANK_OUTER_ARC_DEG: f32 = 100.0;

// Hand armor damage reduction (percent), indexed by ArmorLevel
pub const HAND_REDUCTION_NONE_PCT: u32 = 0;
pub const HAND_REDUCTION_LIGHT_PCT: u32 = 2;
pub const HAND_REDUCTION_MEDIUM_PCT: u32 = 4;
pub const HAND_REDUCTION_HEAVY_PCT: u32 = 8;

// Default health for a freshly spawned combatant
pub const DEFAULT_HEALTH: i32 = 100;
