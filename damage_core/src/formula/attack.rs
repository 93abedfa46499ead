//! Attack-mode damage derived from displayed damage

use super::constants::{
    DUAL_WIELD_POWER_MULTIPLIER, POWER_ATTACK_PERK_BONUS, SNEAK_GLOVES_MULTIPLIER,
};
use crate::weapon::WeaponProfile;
use serde::{Deserialize, Serialize};

/// Optional modifiers for derived attacks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOptions {
    /// Standing power attack perk (Savage Strike, Devastating Blow)
    #[serde(default)]
    pub power_attack_perk: bool,
    /// Sneak multiplier gloves (e.g. Cicero's Gloves)
    #[serde(default)]
    pub sneak_gloves: bool,
}

/// Power attack: `displayed × power multiplier × (1.25 with perk)`
///
/// Categories with power attacks disabled return displayed damage unchanged,
/// ignoring the perk.
pub fn power_attack_damage(displayed: f64, profile: &WeaponProfile, has_power_perk: bool) -> f64 {
    if !profile.power_attack_enabled {
        return displayed;
    }

    let perk = if has_power_perk { POWER_ATTACK_PERK_BONUS } else { 1.0 };
    displayed * profile.power_attack_multiplier * perk
}

/// Sneak attack: `displayed × sneak multiplier × (2 with gloves)`
pub fn sneak_attack_damage(displayed: f64, profile: &WeaponProfile, has_sneak_gloves: bool) -> f64 {
    let gloves = if has_sneak_gloves { SNEAK_GLOVES_MULTIPLIER } else { 1.0 };
    displayed * profile.sneak_multiplier * gloves
}

/// Flat approximation of a dual-wield power attack
pub fn dual_wield_power_attack_damage(displayed: f64) -> f64 {
    displayed * DUAL_WIELD_POWER_MULTIPLIER
}

/// All attack variants for one displayed damage value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttackDamage {
    pub power_attack: f64,
    pub sneak_attack: f64,
    /// Sneak multiplier applied on top of the power attack
    pub power_sneak_attack: f64,
    /// Only for categories that can be dual wielded
    pub dual_wield_power_attack: Option<f64>,
}

impl DerivedAttackDamage {
    pub fn compute(displayed: f64, profile: &WeaponProfile, options: AttackOptions) -> Self {
        let power_attack = power_attack_damage(displayed, profile, options.power_attack_perk);
        DerivedAttackDamage {
            power_attack,
            sneak_attack: sneak_attack_damage(displayed, profile, options.sneak_gloves),
            power_sneak_attack: sneak_attack_damage(power_attack, profile, options.sneak_gloves),
            dual_wield_power_attack: profile
                .dual_wield
                .then(|| dual_wield_power_attack_damage(displayed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaponCategory;
    use crate::weapon::{ARCHERY, DAGGER, ONE_HANDED, TWO_HANDED};

    #[test]
    fn test_one_handed_power_attack() {
        let damage = power_attack_damage(30.0, WeaponCategory::OneHanded.profile(), false);
        assert!((damage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_power_attack_perk() {
        // 30 × 2 × 1.25 = 75
        let damage = power_attack_damage(30.0, &TWO_HANDED, true);
        assert!((damage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_archery_power_attack_is_identity() {
        assert!((power_attack_damage(42.0, &ARCHERY, false) - 42.0).abs() < f64::EPSILON);
        assert!((power_attack_damage(42.0, &ARCHERY, true) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sneak_attack_one_handed() {
        let damage = sneak_attack_damage(30.0, WeaponCategory::OneHanded.profile(), false);
        assert!((damage - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_sneak_gloves_double() {
        // Dagger: 20 × 15 × 2 = 600
        let damage = sneak_attack_damage(20.0, &DAGGER, true);
        assert!((damage - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_dual_wield() {
        assert!((dual_wield_power_attack_damage(30.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_one_handed() {
        let options = AttackOptions {
            power_attack_perk: true,
            sneak_gloves: false,
        };
        let derived = DerivedAttackDamage::compute(30.0, &ONE_HANDED, options);
        assert!((derived.power_attack - 75.0).abs() < 1e-9);
        assert!((derived.sneak_attack - 180.0).abs() < 1e-9);
        // 75 × 6 = 450
        assert!((derived.power_sneak_attack - 450.0).abs() < 1e-9);
        assert_eq!(derived.dual_wield_power_attack, Some(90.0));
    }

    #[test]
    fn test_derived_two_handed_has_no_dual_wield() {
        let derived = DerivedAttackDamage::compute(30.0, &TWO_HANDED, AttackOptions::default());
        assert!(derived.dual_wield_power_attack.is_none());
        assert!((derived.power_sneak_attack - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_archery() {
        let derived = DerivedAttackDamage::compute(50.0, &ARCHERY, AttackOptions::default());
        assert!((derived.power_attack - 50.0).abs() < f64::EPSILON);
        assert!((derived.sneak_attack - 150.0).abs() < 1e-9);
        assert!((derived.power_sneak_attack - derived.sneak_attack).abs() < f64::EPSILON);
    }
}
