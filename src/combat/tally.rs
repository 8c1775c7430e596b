//! Running counters for a statistics collaborator

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::outcome::{BounceReason, CombatOutcome};

/// Accumulated outcome counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatTally {
    pub hits: u32,
    pub blocks: u32,
    pub kills: u32,
    pub damage_dealt: i64,
    bounces: AHashMap<BounceReason, u32>,
}

impl CombatTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved contact
    pub fn record(&mut self, outcome: &CombatOutcome) {
        match outcome {
            CombatOutcome::NotBlocked { damage, .. } => {
                self.hits += 1;
                self.damage_dealt += i64::from(*damage);
            }
            CombatOutcome::Blocked => self.blocks += 1,
            CombatOutcome::Bounced(reason) => *self.bounces.entry(*reason).or_default() += 1,
        }
    }

    /// Count a kill reported by the health collaborator
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn bounces(&self, reason: BounceReason) -> u32 {
        self.bounces.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_bounces(&self) -> u32 {
        self.bounces.values().sum()
    }
}
