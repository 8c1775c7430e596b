//! Collidable body regions

use serde::{Deserialize, Serialize};

/// Region struck by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Torso,
    Legs,
}

impl BodyPart {
    /// Returns all parts, top to bottom
    pub fn all() -> [BodyPart; 3] {
        [BodyPart::Head, BodyPart::Torso, BodyPart::Legs]
    }

    /// Table index
    pub fn index(self) -> usize {
        match self {
            BodyPart::Head => 0,
            BodyPart::Torso => 1,
            BodyPart::Legs => 2,
        }
    }
}
