//! Directional melee combat
//!
//! Leaves first: directions and geometry, the per-combatant action state
//! machine, then the three lookup tables (blocking, damage, reactions), and
//! finally contact resolution that strings them together.

pub mod armor;
pub mod blocking;
pub mod body_part;
pub mod combatant;
pub mod constants;
pub mod damage;
pub mod direction;
pub mod geometry;
pub mod outcome;
pub mod phase;
pub mod reaction;
pub mod resolution;
pub mod tally;
pub mod weapons;

pub use armor::{ArmorLevel, ArmorLoadout};
pub use blocking::{can_block, required_guard};
pub use body_part::BodyPart;
pub use combatant::{Combatant, Pose};
pub use damage::{resolve_damage, resolve_damage_with, HandArmorReduction};
pub use direction::{Direction, RelativeSector};
pub use geometry::{classify_sector, SectorArcs};
pub use outcome::{BounceReason, CombatOutcome, OutcomeCue};
pub use phase::{
    ActionState, AttackMode, AttackState, AttackTrigger, CombatPhase, DefenseState,
    DefenseTrigger,
};
pub use reaction::resolve_reaction;
pub use resolution::{on_weapon_contact, CombatResolver};
pub use tally::CombatTally;
pub use weapons::{DamageTable, WeaponProfile};
