//! Hit reactions: which flinch animation the defender plays
//!
//! Hand-tuned lookup, not a formula. Rows are attack direction in ordinal
//! order (Up, Right, Down, Left).
//!
//! Front hits mirror the blow. Flank hits lean toward the flank. Rear hits
//! pitch forward (Up) whatever the swing axis, except a Right swing to the
//! torso or legs.

use crate::combat::body_part::BodyPart;
use crate::combat::direction::{Direction, RelativeSector};

use Direction::{Down, Left, Right, Up};

/// Indexed by [sector][part][attack direction]
const REACTIONS: [[[Direction; 4]; 3]; 4] = [
    // Front
    [
        [Down, Left, Up, Right],   // head
        [Down, Left, Up, Right],   // torso
        [Down, Left, Down, Right], // legs: low blows buckle the knee
    ],
    // Right
    [
        [Right, Right, Up, Right], // head
        [Down, Right, Right, Right],
        [Down, Right, Right, Right],
    ],
    // Behind
    [
        [Up, Up, Up, Up],
        [Up, Right, Up, Up], // torso: a right swing spins the body
        [Up, Right, Up, Up], // legs
    ],
    // Left
    [
        [Left, Left, Up, Left],
        [Down, Left, Left, Left],
        [Down, Left, Left, Left],
    ],
];

/// Reaction direction for a landed strike
pub fn resolve_reaction(sector: RelativeSector, part: BodyPart, attack_dir: Direction) -> Direction {
    REACTIONS[sector.index()][part.index()][attack_dir.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_torso_mirrors_axis() {
        assert_eq!(resolve_reaction(RelativeSector::Front, BodyPart::Torso, Up), Down);
        assert_eq!(resolve_reaction(RelativeSector::Front, BodyPart::Torso, Down), Up);
        assert_eq!(resolve_reaction(RelativeSector::Front, BodyPart::Torso, Right), Left);
        assert_eq!(resolve_reaction(RelativeSector::Front, BodyPart::Torso, Left), Right);
    }

    #[test]
    fn test_front_leg_sweep_from_below() {
        assert_eq!(resolve_reaction(RelativeSector::Front, BodyPart::Legs, Down), Down);
    }

    #[test]
    fn test_flanks_lean_to_their_side() {
        for part in BodyPart::all() {
            assert_eq!(resolve_reaction(RelativeSector::Right, part, Right), Right);
            assert_eq!(resolve_reaction(RelativeSector::Left, part, Left), Left);
        }
    }

    #[test]
    fn test_rear_mostly_up() {
        let ups = BodyPart::all()
            .into_iter()
            .flat_map(|part| Direction::all().into_iter().map(move |dir| (part, dir)))
            .filter(|&(part, dir)| resolve_reaction(RelativeSector::Behind, part, dir) == Up)
            .count();
        assert_eq!(ups, 10);
        assert_eq!(resolve_reaction(RelativeSector::Behind, BodyPart::Torso, Right), Right);
        assert_eq!(resolve_reaction(RelativeSector::Behind, BodyPart::Legs, Right), Right);
    }

    #[test]
    fn test_full_table() {
        // [sector][part] rows, attack direction Up, Right, Down, Left
        let expected = [
            (RelativeSector::Front, BodyPart::Head, [Down, Left, Up, Right]),
            (RelativeSector::Front, BodyPart::Torso, [Down, Left, Up, Right]),
            (RelativeSector::Front, BodyPart::Legs, [Down, Left, Down, Right]),
            (RelativeSector::Right, BodyPart::Head, [Right, Right, Up, Right]),
            (RelativeSector::Right, BodyPart::Torso, [Down, Right, Right, Right]),
            (RelativeSector::Right, BodyPart::Legs, [Down, Right, Right, Right]),
            (RelativeSector::Behind, BodyPart::Head, [Up, Up, Up, Up]),
            (RelativeSector::Behind, BodyPart::Torso, [Up, Right, Up, Up]),
            (RelativeSector::Behind, BodyPart::Legs, [Up, Right, Up, Up]),
            (RelativeSector::Left, BodyPart::Head, [Left, Left, Up, Left]),
            (RelativeSector::Left, BodyPart::Torso, [Down, Left, Left, Left]),
            (RelativeSector::Left, BodyPart::Legs, [Down, Left, Left, Left]),
        ];
        assert_eq!(expected.len() * 4, 48);
        for (sector, part, row) in expected {
            for (attack, want) in Direction::all().into_iter().zip(row) {
                assert_eq!(resolve_reaction(sector, part, attack), want, "{sector:?} {part:?} {attack:?}");
            }
        }
    }

    #[test]
    fn test_flank_tables_are_mirror_images() {
        for part in BodyPart::all() {
            for dir in Direction::all() {
                let right = resolve_reaction(RelativeSector::Right, part, dir);
                let left = resolve_reaction(RelativeSector::Left, part, dir.mirror());
                assert_eq!(right.mirror(), left, "{part:?} {dir:?}");
            }
        }
    }
}
