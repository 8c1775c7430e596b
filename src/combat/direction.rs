//! Combat directions and relative sectors
//!
//! One four-way direction enum serves three purposes: the side an attack
//! comes from, the side a guard covers, and the reaction animation to play.

use serde::{Deserialize, Serialize};

/// Cardinal combat direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns all directions in ordinal order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }

    /// Table index
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Direction as seen by someone facing us.
    ///
    /// The vertical axis is shared; the horizontal axis swaps.
    pub fn mirror(self) -> Direction {
        match self {
            Direction::Up => Direction::Up,
            Direction::Down => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Opposite end of the same axis
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Where the attacker stands relative to the defender's facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeSector {
    Front,
    Right,
    Behind,
    Left,
}

impl RelativeSector {
    /// Returns all sectors in ordinal order
    pub fn all() -> [RelativeSector; 4] {
        [
            RelativeSector::Front,
            RelativeSector::Right,
            RelativeSector::Behind,
            RelativeSector::Left,
        ]
    }

    /// Table index
    pub fn index(self) -> usize {
        match self {
            RelativeSector::Front => 0,
            RelativeSector::Right => 1,
            RelativeSector::Behind => 2,
            RelativeSector::Left => 3,
        }
    }

    /// Is the attacker on either flank?
    pub fn is_flank(self) -> bool {
        matches!(self, RelativeSector::Right | RelativeSector::Left)
    }
}
