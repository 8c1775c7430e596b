//! Block resolution: attack direction vs guard direction per sector
//!
//! Categorical lookup only. Each cell names the guard that stops an attack
//! from that direction when the attacker stands in that sector.

use crate::combat::direction::{Direction, RelativeSector};

use Direction::{Down, Left, Right, Up};

/// Required guard, indexed by [sector][attack direction]
///
/// Front mirrors (the attacker's left arrives on our right). On a flank the
/// blow arrives on the side it is named for, except the one swinging in from
/// behind the defender's shoulder.
const REQUIRED_GUARD: [[Option<Direction>; 4]; 4] = [
    // Front:        Up        Right        Down        Left
    [Some(Up), Some(Left), Some(Down), Some(Right)],
    // Right flank: Left attacks come round the back
    [Some(Up), Some(Right), Some(Down), None],
    // Behind: nothing to block with
    [None, None, None, None],
    // Left flank: Right attacks come round the back
    [Some(Up), None, Some(Down), Some(Left)],
];

/// Guard that stops `attack_dir` from `sector`, or None if unblockable
pub fn required_guard(attack_dir: Direction, sector: RelativeSector) -> Option<Direction> {
    REQUIRED_GUARD[sector.index()][attack_dir.index()]
}

/// Can a guard on `defend_dir` stop an attack from `attack_dir`?
pub fn can_block(attack_dir: Direction, defend_dir: Direction, sector: RelativeSector) -> bool {
    required_guard(attack_dir, sector) == Some(defend_dir)
}
