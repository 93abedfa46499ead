//! Damage formulas - pure functions from inputs to displayed and attack damage
//!
//! Every function here is deterministic and side-effect free. Inputs are
//! expected to be validated (see [`DamageInputs::validate`]) before they reach
//! the formulas.

mod attack;
mod displayed;
mod multipliers;
mod tempering;

pub use attack::{
    dual_wield_power_attack_damage, power_attack_damage, sneak_attack_damage, AttackOptions,
    DerivedAttackDamage,
};
pub use displayed::{
    calculate_displayed_damage, displayed_damage_with_tempering, DamageInputs, DisplayedDamage,
    SmithingInputs,
};
pub use multipliers::{
    fortify_multiplier, seeker_of_might_multiplier, skill_multiplier, weapon_perk_multiplier,
};
pub use tempering::{quality_level_tempering_bonus, tempering_bonus, TemperingModel};

/// Formula constants
pub mod constants {
    /// Skill contributes up to +50% at level 100
    pub const SKILL_SCALE: f64 = 0.5;

    /// Damage perk bonus per rank (Armsman, Barbarian, Overdraw)
    pub const WEAPON_PERK_BONUS: f64 = 0.20;

    /// Seeker of Might: +10%
    pub const SEEKER_OF_MIGHT_MULTIPLIER: f64 = 1.10;

    /// Standing power attack perk bonus (Savage Strike, Devastating Blow)
    pub const POWER_ATTACK_PERK_BONUS: f64 = 1.25;

    /// Sneak multiplier gloves double sneak damage
    pub const SNEAK_GLOVES_MULTIPLIER: f64 = 2.0;

    /// Flat dual-wield power attack approximation
    pub const DUAL_WIELD_POWER_MULTIPLIER: f64 = 3.0;

    /// Smithing level divisor in the smooth tempering curve
    pub const TEMPERING_LEVEL_DIVISOR: f64 = 200.0;

    /// Smithing perk bonus in the smooth tempering curve
    pub const TEMPERING_PERK_MULTIPLIER: f64 = 1.5;

    /// Skill offset in the stepped quality-level curve
    pub const QUALITY_SKILL_OFFSET: f64 = 13.29;

    /// Weapons receive half the armour-piece improvement
    pub const WEAPON_QUALITY_FACTOR: f64 = 0.5;

    /// Lowest and highest skill levels offered by the form
    pub const MIN_SKILL: u32 = 15;
    pub const MAX_SKILL: u32 = 100;

    /// Highest damage perk rank
    pub const MAX_PERK_RANK: u32 = 5;
}
