//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

/// Team tag; combatants sharing a side never damage each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Side(pub u8);
