//! Weapon registry for loading combat data from TOML
//!
//! Every table is checked here, before any weapon reaches resolution.
//! Resolution assumes complete, non-negative tables and never re-checks.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::combat::resolution::CombatResolver;
use crate::combat::weapons::WeaponProfile;
use crate::core::config::CombatConfig;
use crate::core::error::{DataError, Result};

/// On-disk layout of a combat data file
#[derive(Debug, Deserialize)]
struct CombatDataFile {
    #[serde(default)]
    rules: Option<CombatConfig>,
    #[serde(default, rename = "weapon")]
    weapons: Vec<WeaponProfile>,
}

/// Validated weapons plus the rule configuration they were loaded with
#[derive(Debug, Clone, Default)]
pub struct WeaponRegistry {
    weapons: AHashMap<String, WeaponProfile>,
    config: CombatConfig,
}

impl WeaponRegistry {
    /// Create an empty registry with default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in weapons
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for weapon in [
            WeaponProfile::arming_sword(),
            WeaponProfile::spear(),
            WeaponProfile::mace(),
        ] {
            registry.weapons.insert(weapon.name.clone(), weapon);
        }
        registry
    }

    /// Validate and add a weapon
    pub fn register(&mut self, weapon: WeaponProfile) -> Result<()> {
        validate_weapon(&weapon)?;
        if self.weapons.contains_key(&weapon.name) {
            return Err(DataError::DuplicateWeapon(weapon.name));
        }
        tracing::debug!(weapon = %weapon.name, reach = weapon.reach, "registered weapon");
        self.weapons.insert(weapon.name.clone(), weapon);
        Ok(())
    }

    /// Load weapons and optional rules from TOML text
    ///
    /// Returns the number of weapons added. A file that fails any check
    /// leaves the registry untouched.
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let file: CombatDataFile = toml::from_str(content)?;

        if let Some(rules) = &file.rules {
            rules.validate().map_err(DataError::InvalidRules)?;
        }

        let mut staged: AHashMap<String, WeaponProfile> = AHashMap::new();
        for weapon in file.weapons {
            validate_weapon(&weapon)?;
            if self.weapons.contains_key(&weapon.name) || staged.contains_key(&weapon.name) {
                return Err(DataError::DuplicateWeapon(weapon.name));
            }
            staged.insert(weapon.name.clone(), weapon);
        }

        // Everything checked; commit
        if let Some(rules) = file.rules {
            self.config = rules;
        }
        let count = staged.len();
        for (name, weapon) in staged {
            tracing::debug!(weapon = %name, reach = weapon.reach, "registered weapon");
            self.weapons.insert(name, weapon);
        }
        Ok(count)
    }

    /// Load weapons and optional rules from a TOML file
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let count = self.load_str(&content)?;
        tracing::info!(path = %path.display(), count, "loaded combat data");
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<&WeaponProfile> {
        self.weapons.get(name)
    }

    /// Look up a weapon that must exist
    pub fn require(&self, name: &str) -> Result<&WeaponProfile> {
        self.get(name)
            .ok_or_else(|| DataError::UnknownWeapon(name.to_string()))
    }

    /// Weapon names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.weapons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Resolver configured with the loaded rules
    pub fn resolver(&self) -> CombatResolver {
        CombatResolver::new(self.config)
    }
}

fn validate_weapon(weapon: &WeaponProfile) -> Result<()> {
    let invalid = |reason: String| DataError::InvalidWeapon {
        weapon: weapon.name.clone(),
        reason,
    };

    if weapon.name.trim().is_empty() {
        return Err(invalid("name is empty".into()));
    }
    if !(weapon.reach.is_finite() && weapon.reach > 0.0) {
        return Err(invalid(format!("reach must be positive, got {}", weapon.reach)));
    }
    for (mode, table) in [("swing", &weapon.swing), ("stab", &weapon.stab)] {
        if let Some((part, armor, raw)) = table.entries().find(|&(_, _, raw)| raw < 0) {
            return Err(invalid(format!(
                "{} damage for {:?} vs {:?} armor is negative ({})",
                mode, part, armor, raw
            )));
        }
    }
    Ok(())
}
