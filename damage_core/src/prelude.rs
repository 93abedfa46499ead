//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::WeaponCategory;
pub use crate::weapon::{WeaponProfile, WeaponTable};

// Formulas
pub use crate::formula::{
    calculate_displayed_damage, dual_wield_power_attack_damage, fortify_multiplier,
    power_attack_damage, seeker_of_might_multiplier, skill_multiplier, sneak_attack_damage,
    tempering_bonus, weapon_perk_multiplier, AttackOptions, DamageInputs, DisplayedDamage,
    SmithingInputs, TemperingModel,
};

// Calculation
pub use crate::calculator::{DamageCalculator, DamageReport};

// Saved results
pub use crate::record::{ResultLog, SavedResultRecord};

// Errors
pub use crate::error::DamageError;
