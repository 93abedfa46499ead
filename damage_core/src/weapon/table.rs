//! WeaponTable - one profile per category, with config overrides applied

use super::profile::{WeaponProfile, ARCHERY, DAGGER, ONE_HANDED, TWO_HANDED};
use crate::config::ConfigError;
use crate::types::WeaponCategory;
use serde::{Deserialize, Serialize};

/// Optional per-field overrides for a single category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
    #[serde(default)]
    pub power_attack_multiplier: Option<f64>,
    #[serde(default)]
    pub power_attack_enabled: Option<bool>,
    #[serde(default)]
    pub sneak_multiplier: Option<f64>,
    #[serde(default)]
    pub dual_wield: Option<bool>,
}

impl ProfileOverride {
    fn apply(&self, profile: &mut WeaponProfile) -> Result<(), ConfigError> {
        if let Some(mult) = self.power_attack_multiplier {
            profile.power_attack_multiplier =
                check_multiplier(profile.category, "power_attack_multiplier", mult)?;
        }
        if let Some(enabled) = self.power_attack_enabled {
            profile.power_attack_enabled = enabled;
        }
        if let Some(mult) = self.sneak_multiplier {
            profile.sneak_multiplier =
                check_multiplier(profile.category, "sneak_multiplier", mult)?;
        }
        if let Some(dual) = self.dual_wield {
            profile.dual_wield = dual;
        }
        Ok(())
    }
}

fn check_multiplier(category: WeaponCategory, field: &str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "weapons.{}.{} must be a finite non-negative number, got {}",
            category.key(),
            field,
            value
        )));
    }
    Ok(value)
}

/// Overrides keyed by category; unknown category keys are rejected at parse time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponOverrides {
    #[serde(default)]
    pub one_handed: ProfileOverride,
    #[serde(default)]
    pub two_handed: ProfileOverride,
    #[serde(default)]
    pub dagger: ProfileOverride,
    #[serde(default)]
    pub archery: ProfileOverride,
}

impl WeaponOverrides {
    pub fn get(&self, category: WeaponCategory) -> &ProfileOverride {
        match category {
            WeaponCategory::OneHanded => &self.one_handed,
            WeaponCategory::TwoHanded => &self.two_handed,
            WeaponCategory::Dagger => &self.dagger,
            WeaponCategory::Archery => &self.archery,
        }
    }
}

/// The active profile for every category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponTable {
    one_handed: WeaponProfile,
    two_handed: WeaponProfile,
    dagger: WeaponProfile,
    archery: WeaponProfile,
}

impl Default for WeaponTable {
    fn default() -> Self {
        WeaponTable {
            one_handed: ONE_HANDED,
            two_handed: TWO_HANDED,
            dagger: DAGGER,
            archery: ARCHERY,
        }
    }
}

impl WeaponTable {
    /// Build a table from the canonical profiles with overrides applied
    pub fn with_overrides(overrides: &WeaponOverrides) -> Result<Self, ConfigError> {
        let mut table = WeaponTable::default();
        for category in WeaponCategory::all() {
            overrides.get(*category).apply(table.get_mut(*category))?;
        }
        Ok(table)
    }

    pub fn get(&self, category: WeaponCategory) -> &WeaponProfile {
        match category {
            WeaponCategory::OneHanded => &self.one_handed,
            WeaponCategory::TwoHanded => &self.two_handed,
            WeaponCategory::Dagger => &self.dagger,
            WeaponCategory::Archery => &self.archery,
        }
    }

    fn get_mut(&mut self, category: WeaponCategory) -> &mut WeaponProfile {
        match category {
            WeaponCategory::OneHanded => &mut self.one_handed,
            WeaponCategory::TwoHanded => &mut self.two_handed,
            WeaponCategory::Dagger => &mut self.dagger,
            WeaponCategory::Archery => &mut self.archery,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponProfile> {
        WeaponCategory::all().iter().map(move |c| self.get(*c))
    }
}
