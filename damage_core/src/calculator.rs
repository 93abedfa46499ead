//! DamageCalculator - validated inputs in, full damage report out

use crate::config::{CalculatorConfig, ConfigError};
use crate::error::DamageError;
use crate::formula::{
    displayed_damage_with_tempering, AttackOptions, DamageInputs, DerivedAttackDamage,
    DisplayedDamage, TemperingModel,
};
use crate::types::WeaponCategory;
use crate::weapon::{WeaponProfile, WeaponTable};
use serde::{Deserialize, Serialize};

/// Everything computed for one weapon setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub category: WeaponCategory,
    /// Inputs after category normalisation (ammo/fortify zeroed where ignored)
    pub inputs: DamageInputs,
    pub options: AttackOptions,
    /// Flat smithing improvement added to base damage
    pub tempering_bonus: f64,
    pub displayed: DisplayedDamage,
    pub attacks: DerivedAttackDamage,
}

/// Applies the weapon table and tempering model to damage inputs
#[derive(Debug, Clone, Default)]
pub struct DamageCalculator {
    table: WeaponTable,
    tempering_model: TemperingModel,
}

impl DamageCalculator {
    pub fn new(table: WeaponTable, tempering_model: TemperingModel) -> Self {
        DamageCalculator {
            table,
            tempering_model,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        Ok(DamageCalculator::new(config.weapon_table()?, config.tempering_model))
    }

    pub fn profile(&self, category: WeaponCategory) -> &WeaponProfile {
        self.table.get(category)
    }

    pub fn table(&self) -> &WeaponTable {
        &self.table
    }

    pub fn tempering_model(&self) -> TemperingModel {
        self.tempering_model
    }

    /// Validate inputs and compute displayed damage plus all attack variants
    pub fn calculate(
        &self,
        category: WeaponCategory,
        inputs: &DamageInputs,
        options: AttackOptions,
    ) -> Result<DamageReport, DamageError> {
        if let Err(e) = inputs.validate() {
            tracing::warn!(%category, error = %e, "rejected damage inputs");
            return Err(e);
        }

        let profile = self.table.get(category);
        let inputs = normalise(profile, inputs);

        let tempering_bonus = inputs.tempering_bonus(self.tempering_model);
        let displayed = displayed_damage_with_tempering(&inputs, tempering_bonus);
        let attacks = DerivedAttackDamage::compute(displayed.value(), profile, options);

        tracing::debug!(
            %category,
            displayed = displayed.value(),
            tempering_bonus,
            power_attack = attacks.power_attack,
            sneak_attack = attacks.sneak_attack,
            "calculated damage"
        );

        Ok(DamageReport {
            category,
            inputs,
            options,
            tempering_bonus,
            displayed,
            attacks,
        })
    }

    /// Parse a category name then calculate
    pub fn calculate_named(
        &self,
        category: &str,
        inputs: &DamageInputs,
        options: AttackOptions,
    ) -> Result<DamageReport, DamageError> {
        let category: WeaponCategory = category.parse()?;
        self.calculate(category, inputs, options)
    }
}

/// Drop inputs the category does not use
fn normalise(profile: &WeaponProfile, inputs: &DamageInputs) -> DamageInputs {
    let mut inputs = *inputs;
    if !profile.uses_ammo {
        inputs.ammo_damage = 0;
    }
    if !profile.fortify_applies {
        inputs.fortify_enchantment = 0.0;
        inputs.fortify_potion = 0.0;
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::SmithingInputs;
    use crate::weapon::{ProfileOverride, WeaponOverrides};

    #[test]
    fn test_one_handed_report() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100).with_perk_rank(5);
        let report = calc
            .calculate(WeaponCategory::OneHanded, &inputs, AttackOptions::default())
            .unwrap();

        assert!((report.displayed.value() - 30.0).abs() < 1e-9);
        assert!((report.attacks.power_attack - 60.0).abs() < 1e-9);
        assert!((report.attacks.sneak_attack - 180.0).abs() < 1e-9);
        assert!((report.attacks.power_sneak_attack - 360.0).abs() < 1e-9);
        assert!(report.attacks.dual_wield_power_attack.is_some());
        assert_eq!(report.tempering_bonus, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100).with_fortify(-1.0, 0.0);
        let result = calc.calculate(WeaponCategory::TwoHanded, &inputs, AttackOptions::default());
        assert!(matches!(result, Err(DamageError::InvalidInput { .. })));
    }

    #[test]
    fn test_melee_ignores_ammo() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100).with_ammo(24);
        let report = calc
            .calculate(WeaponCategory::TwoHanded, &inputs, AttackOptions::default())
            .unwrap();
        assert!((report.displayed.value() - 15.0).abs() < 1e-9);
        assert_eq!(report.inputs.ammo_damage, 0);
    }

    #[test]
    fn test_archery_adds_ammo() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100).with_ammo(24);
        let report = calc
            .calculate(WeaponCategory::Archery, &inputs, AttackOptions { power_attack_perk: true, sneak_gloves: false })
            .unwrap();
        assert!((report.displayed.value() - 39.0).abs() < 1e-9);
        // No power attack for bows, perk ignored
        assert!((report.attacks.power_attack - 39.0).abs() < 1e-9);
        assert!((report.attacks.sneak_attack - 117.0).abs() < 1e-9);
    }

    #[test]
    fn test_dagger_ignores_fortify() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100).with_fortify(1.2, 0.5);
        let report = calc
            .calculate(WeaponCategory::Dagger, &inputs, AttackOptions::default())
            .unwrap();
        assert!((report.displayed.value() - 15.0).abs() < 1e-9);
        assert!((report.attacks.sneak_attack - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_level_model() {
        let calc = DamageCalculator::new(WeaponTable::default(), TemperingModel::QualityLevel);
        let inputs = DamageInputs::new(10, 100).with_smithing(SmithingInputs {
            level: 100,
            ..Default::default()
        });
        let report = calc
            .calculate(WeaponCategory::OneHanded, &inputs, AttackOptions::default())
            .unwrap();
        assert!((report.tempering_bonus - 6.4).abs() < 1e-9);
        // (10 + 6.4) × 1.5
        assert!((report.displayed.value() - 24.6).abs() < 1e-9);
    }

    #[test]
    fn test_overridden_table() {
        let overrides = WeaponOverrides {
            two_handed: ProfileOverride {
                power_attack_multiplier: Some(2.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let calc = DamageCalculator::new(WeaponTable::with_overrides(&overrides).unwrap(), TemperingModel::Approximate);
        let report = calc
            .calculate(WeaponCategory::TwoHanded, &DamageInputs::new(10, 100), AttackOptions::default())
            .unwrap();
        assert!((report.attacks.power_attack - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_named() {
        let calc = DamageCalculator::default();
        let inputs = DamageInputs::new(10, 100);
        assert!(calc.calculate_named("Two-handed", &inputs, AttackOptions::default()).is_ok());

        let err = calc.calculate_named("Staff", &inputs, AttackOptions::default()).unwrap_err();
        assert!(matches!(err, DamageError::UnknownCategory(_)));
    }

    #[test]
    fn test_calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DamageCalculator>();
    }
}
