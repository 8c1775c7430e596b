//! Sector classification on the ground plane
//!
//! The defender's surroundings are split into four arcs. The front arc is
//! wider than the flanks; whatever is left over behind the defender is the
//! rear arc.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::combat::constants::{FLANK_OUTER_ARC_DEG, FRONT_HALF_ARC_DEG};
use crate::combat::direction::RelativeSector;

/// Arc boundaries in degrees, measured from the defender's forward vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorArcs {
    /// Half-width of the front arc (front is the open interval +/- this)
    pub front_half_arc: f32,
    /// Outer edge of each flank arc
    pub flank_outer_arc: f32,
}

impl Default for SectorArcs {
    fn default() -> Self {
        Self {
            front_half_arc: FRONT_HALF_ARC_DEG,
            flank_outer_arc: FLANK_OUTER_ARC_DEG,
        }
    }
}

impl SectorArcs {
    /// Classify a relative angle already normalized into (-180, 180].
    ///
    /// Negative angles are clockwise of forward, i.e. the defender's right.
    pub fn classify_angle(&self, degrees: f32) -> RelativeSector {
        let front = self.front_half_arc;
        let flank = self.flank_outer_arc;

        if degrees > -front && degrees < front {
            RelativeSector::Front
        } else if (-flank..=-front).contains(&degrees) {
            RelativeSector::Right
        } else if (front..=flank).contains(&degrees) {
            RelativeSector::Left
        } else {
            RelativeSector::Behind
        }
    }

    /// Classify where `attacker_pos` stands relative to a defender
    pub fn classify(
        &self,
        defender_forward: Vec2,
        defender_pos: Vec2,
        attacker_pos: Vec2,
    ) -> RelativeSector {
        let displacement = attacker_pos - defender_pos;
        if displacement.length_squared() <= f32::EPSILON {
            // Standing inside the defender; treat as face to face
            return RelativeSector::Front;
        }
        self.classify_angle(relative_angle(defender_forward, displacement))
    }
}

/// Signed angle in degrees from `forward` to `displacement`, in (-180, 180]
pub fn relative_angle(forward: Vec2, displacement: Vec2) -> f32 {
    let raw = displacement.y.atan2(displacement.x) - forward.y.atan2(forward.x);
    normalize_degrees(raw.to_degrees())
}

/// Wrap any angle into (-180, 180]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Project a world-space vector (y up) onto the ground plane
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Classify with the default arcs
pub fn classify_sector(
    defender_forward: Vec2,
    defender_pos: Vec2,
    attacker_pos: Vec2,
) -> RelativeSector {
    SectorArcs::default().classify(defender_forward, defender_pos, attacker_pos)
}
