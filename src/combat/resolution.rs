//! Weapon contact resolution
//!
//! Called once per contact by the collision layer. Reads both action states,
//! classifies the geometry, checks the guard, and either bounces the strike
//! or prices it. Health, audio and animation stay with the caller; the only
//! writes here are phase triggers on the two combatants.

use crate::combat::blocking::can_block;
use crate::combat::body_part::BodyPart;
use crate::combat::combatant::Combatant;
use crate::combat::damage::resolve_damage_with;
use crate::combat::outcome::{BounceReason, CombatOutcome};
use crate::combat::phase::{AttackTrigger, DefenseTrigger};
use crate::combat::reaction::resolve_reaction;
use crate::core::config::CombatConfig;

/// Applies the combat rules under one configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver {
    config: CombatConfig,
}

impl CombatResolver {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Resolve an attacker's weapon touching a defender's body part
    ///
    /// # Arguments
    /// * `attacker` - Owner of the weapon; must be mid-strike to count
    /// * `defender` - Owner of the struck part
    /// * `part` - Collider region that was touched
    ///
    /// # Returns
    /// The decision for the caller to act on. The caller ensures at most one
    /// call per active strike per target.
    pub fn on_weapon_contact(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        part: BodyPart,
    ) -> CombatOutcome {
        // Transitional frames never count
        let Some((attack_dir, mode)) = attacker.actions.active_attack() else {
            tracing::trace!(
                attacker = ?attacker.id,
                phase = ?attacker.actions.attack_phase(),
                "contact outside active strike"
            );
            return CombatOutcome::Bounced(BounceReason::NotStriking);
        };

        // Step 1: Allies and corpses bounce the blade
        if defender.is_dead() || attacker.is_ally_of(defender) {
            let reason = BounceReason::FriendlyFire;
            attacker.actions.trigger_attack(AttackTrigger::Bounce(reason));
            tracing::debug!(
                attacker = ?attacker.id,
                defender = ?defender.id,
                "contact bounced off ally or downed target"
            );
            return CombatOutcome::Bounced(reason);
        }

        // Step 2: Where does the attacker stand?
        let sector = self.config.arcs.classify(
            defender.pose.planar_forward(),
            defender.pose.planar_position(),
            attacker.pose.planar_position(),
        );

        // Steps 3-4: Only a set guard can block
        if let Some(guard_dir) = defender.actions.active_guard() {
            if can_block(attack_dir, guard_dir, sector) {
                defender.actions.trigger_defense(DefenseTrigger::Absorb);
                attacker
                    .actions
                    .trigger_attack(AttackTrigger::Bounce(BounceReason::Blocked));
                tracing::debug!(
                    attacker = ?attacker.id,
                    defender = ?defender.id,
                    ?sector,
                    ?attack_dir,
                    ?guard_dir,
                    "strike blocked"
                );
                return CombatOutcome::Blocked;
            }
        }

        // Step 5: Clean hit
        let damage = resolve_damage_with(
            &self.config.hand_armor_reduction,
            &attacker.weapon,
            mode,
            part,
            defender.armor.for_part(part),
            defender.armor.hand,
        );
        let reaction = resolve_reaction(sector, part, attack_dir);
        attacker.actions.trigger_attack(AttackTrigger::Connect);

        tracing::debug!(
            attacker = ?attacker.id,
            defender = ?defender.id,
            ?sector,
            ?attack_dir,
            ?part,
            damage,
            ?reaction,
            "strike landed"
        );
        CombatOutcome::NotBlocked { damage, reaction }
    }

    /// Resolve an attacker's weapon striking level geometry
    pub fn on_obstacle_contact(&self, attacker: &mut Combatant) -> CombatOutcome {
        if !attacker.actions.is_attacking() {
            return CombatOutcome::Bounced(BounceReason::NotStriking);
        }
        let reason = BounceReason::Obstacle;
        attacker.actions.trigger_attack(AttackTrigger::Bounce(reason));
        tracing::debug!(attacker = ?attacker.id, "strike bounced off obstacle");
        CombatOutcome::Bounced(reason)
    }
}

/// Resolve a contact with the default configuration
pub fn on_weapon_contact(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    part: BodyPart,
) -> CombatOutcome {
    CombatResolver::default().on_weapon_contact(attacker, defender, part)
}
