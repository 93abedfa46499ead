//! Displayed (inventory) damage

use super::constants::{MAX_PERK_RANK, MAX_SKILL};
use super::multipliers::{
    fortify_multiplier, seeker_of_might_multiplier, skill_multiplier, weapon_perk_multiplier,
};
use super::tempering::TemperingModel;
use crate::error::DamageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smithing improvement inputs; present only when tempering is included
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmithingInputs {
    /// Smithing skill level
    pub level: u32,
    /// Has the matching smithing perk (e.g. Daedric Smithing for Dragonbone)
    pub has_perk: bool,
    /// Fortify Smithing enchantments, as a fraction (0.75 = 75%)
    #[serde(default)]
    pub enchantment: f64,
    /// Fortify Smithing potion, as a fraction
    #[serde(default)]
    pub potion: f64,
    #[serde(default)]
    pub seeker_of_might: bool,
}

/// Everything that feeds displayed damage for one weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageInputs {
    pub base_damage: u32,
    /// Arrow damage, added after scaling (ranged only)
    #[serde(default)]
    pub ammo_damage: u32,
    pub skill_level: u32,
    #[serde(default)]
    pub perk_rank: u32,
    /// Sum of fortify skill enchantments, as a fraction
    #[serde(default)]
    pub fortify_enchantment: f64,
    /// Fortify skill potion, as a fraction
    #[serde(default)]
    pub fortify_potion: f64,
    #[serde(default)]
    pub seeker_of_might: bool,
    /// `None` when tempering is not included
    #[serde(default)]
    pub smithing: Option<SmithingInputs>,
}

impl DamageInputs {
    /// Inputs with just a base damage and skill level, no bonuses
    pub fn new(base_damage: u32, skill_level: u32) -> Self {
        DamageInputs {
            base_damage,
            skill_level,
            ..Default::default()
        }
    }

    pub fn with_perk_rank(mut self, perk_rank: u32) -> Self {
        self.perk_rank = perk_rank;
        self
    }

    pub fn with_fortify(mut self, enchantment: f64, potion: f64) -> Self {
        self.fortify_enchantment = enchantment;
        self.fortify_potion = potion;
        self
    }

    pub fn with_ammo(mut self, ammo_damage: u32) -> Self {
        self.ammo_damage = ammo_damage;
        self
    }

    pub fn with_seeker_of_might(mut self, enabled: bool) -> Self {
        self.seeker_of_might = enabled;
        self
    }

    pub fn with_smithing(mut self, smithing: SmithingInputs) -> Self {
        self.smithing = Some(smithing);
        self
    }

    pub fn tempering_enabled(&self) -> bool {
        self.smithing.is_some()
    }

    /// Check every field against its documented domain
    pub fn validate(&self) -> Result<(), DamageError> {
        if self.skill_level > MAX_SKILL {
            return Err(DamageError::invalid(
                "skill_level",
                format!("must be at most {}, got {}", MAX_SKILL, self.skill_level),
            ));
        }
        if self.perk_rank > MAX_PERK_RANK {
            return Err(DamageError::invalid(
                "perk_rank",
                format!("must be at most {}, got {}", MAX_PERK_RANK, self.perk_rank),
            ));
        }
        check_fraction("fortify_enchantment", self.fortify_enchantment)?;
        check_fraction("fortify_potion", self.fortify_potion)?;

        if let Some(smithing) = &self.smithing {
            if smithing.level > MAX_SKILL {
                return Err(DamageError::invalid(
                    "smithing.level",
                    format!("must be at most {}, got {}", MAX_SKILL, smithing.level),
                ));
            }
            check_fraction("smithing.enchantment", smithing.enchantment)?;
            check_fraction("smithing.potion", smithing.potion)?;
        }

        Ok(())
    }

    /// Tempering improvement under the given model, 0 when tempering is off
    pub fn tempering_bonus(&self, model: TemperingModel) -> f64 {
        match &self.smithing {
            Some(smithing) => model.bonus(self.base_damage as f64, smithing),
            None => 0.0,
        }
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), DamageError> {
    if !value.is_finite() {
        return Err(DamageError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(DamageError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

/// Damage shown in the inventory, before attack modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayedDamage(f64);

impl DisplayedDamage {
    pub fn new(value: f64) -> Self {
        DisplayedDamage(value)
    }

    /// Exact value, used for attack calculations
    pub fn value(&self) -> f64 {
        self.0
    }

    /// What the inventory screen shows (truncated)
    pub fn floored(&self) -> i64 {
        self.0.floor() as i64
    }

    /// Nearest whole number, ties to even
    pub fn rounded(&self) -> i64 {
        self.0.round_ties_even() as i64
    }
}

impl fmt::Display for DisplayedDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Displayed damage with the canonical (smooth) tempering curve
///
/// `(base + tempering) × skill × perk × fortify × seeker + ammo`
pub fn calculate_displayed_damage(inputs: &DamageInputs) -> DisplayedDamage {
    let tempering = inputs.tempering_bonus(TemperingModel::Approximate);
    displayed_damage_with_tempering(inputs, tempering)
}

/// Displayed damage with an already computed tempering improvement
pub fn displayed_damage_with_tempering(inputs: &DamageInputs, tempering: f64) -> DisplayedDamage {
    let scaled = (inputs.base_damage as f64 + tempering)
        * skill_multiplier(inputs.skill_level as f64)
        * weapon_perk_multiplier(inputs.perk_rank as f64)
        * fortify_multiplier(inputs.fortify_enchantment, inputs.fortify_potion)
        * seeker_of_might_multiplier(inputs.seeker_of_might);

    // Ammunition is added after all weapon scaling
    DisplayedDamage(scaled + inputs.ammo_damage as f64)
}
