//! WeaponProfile - static constants for each weapon category

use crate::types::WeaponCategory;
use serde::Serialize;

/// Reference data for one weapon category
///
/// Names are what the game calls the governing skill and perks; the
/// multipliers drive the attack-mode formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeaponProfile {
    pub category: WeaponCategory,
    /// Skill that scales this weapon (daggers use One-handed)
    pub skill_name: &'static str,
    /// Ranked damage perk (Armsman, Barbarian, Overdraw)
    pub perk_name: &'static str,
    /// Standing power attack perk, empty when the category has none
    pub power_perk_name: &'static str,
    /// Power attack multiplier on displayed damage
    pub power_attack_multiplier: f64,
    /// Whether power attacks scale damage at all for this category
    pub power_attack_enabled: bool,
    /// Sneak attack multiplier on displayed damage
    pub sneak_multiplier: f64,
    /// Whether a dual-wield power attack is possible
    pub dual_wield: bool,
    /// Whether ammunition damage is added to displayed damage
    pub uses_ammo: bool,
    /// Whether fortify enchantments/potions apply
    pub fortify_applies: bool,
}

pub const ONE_HANDED: WeaponProfile = WeaponProfile {
    category: WeaponCategory::OneHanded,
    skill_name: "One-handed",
    perk_name: "Armsman",
    power_perk_name: "Savage Strike",
    power_attack_multiplier: 2.0,
    power_attack_enabled: true,
    sneak_multiplier: 6.0,
    dual_wield: true,
    uses_ammo: false,
    fortify_applies: true,
};

pub const TWO_HANDED: WeaponProfile = WeaponProfile {
    category: WeaponCategory::TwoHanded,
    skill_name: "Two-handed",
    perk_name: "Barbarian",
    power_perk_name: "Devastating Blow",
    power_attack_multiplier: 2.0,
    power_attack_enabled: true,
    sneak_multiplier: 2.0,
    dual_wield: false,
    uses_ammo: false,
    fortify_applies: true,
};

pub const DAGGER: WeaponProfile = WeaponProfile {
    category: WeaponCategory::Dagger,
    skill_name: "One-handed",
    perk_name: "Armsman",
    power_perk_name: "Savage Strike",
    power_attack_multiplier: 2.0,
    power_attack_enabled: true,
    sneak_multiplier: 15.0,
    dual_wield: true,
    uses_ammo: false,
    fortify_applies: false,
};

pub const ARCHERY: WeaponProfile = WeaponProfile {
    category: WeaponCategory::Archery,
    skill_name: "Archery",
    perk_name: "Overdraw",
    power_perk_name: "",
    power_attack_multiplier: 1.0,
    power_attack_enabled: false,
    sneak_multiplier: 3.0,
    dual_wield: false,
    uses_ammo: true,
    fortify_applies: true,
};

impl WeaponCategory {
    /// Canonical profile for this category
    pub fn profile(&self) -> &'static WeaponProfile {
        match self {
            WeaponCategory::OneHanded => &ONE_HANDED,
            WeaponCategory::TwoHanded => &TWO_HANDED,
            WeaponCategory::Dagger => &DAGGER,
            WeaponCategory::Archery => &ARCHERY,
        }
    }
}

impl WeaponProfile {
    pub fn has_power_perk(&self) -> bool {
        !self.power_perk_name.is_empty()
    }
}
