//! damage_core - Weapon damage formulas for Skyrim-style characters
//!
//! This library provides:
//! - Formula library: pure skill/perk/fortify/tempering multipliers
//! - WeaponProfile: per-category reference data (sneak and power attack constants)
//! - DamageCalculator: validated inputs -> DamageReport
//! - ResultLog: saved snapshots with CSV/JSON export

pub mod calculator;
pub mod config;
pub mod error;
pub mod formula;
pub mod prelude;
pub mod record;
pub mod types;
pub mod weapon;

// Re-export core types for convenience
pub use calculator::{DamageCalculator, DamageReport};
pub use config::{default_config, CalculatorConfig, ConfigError};
pub use error::DamageError;
pub use formula::{
    calculate_displayed_damage, AttackOptions, DamageInputs, DerivedAttackDamage,
    DisplayedDamage, SmithingInputs, TemperingModel,
};
pub use record::{ResultLog, SavedResultRecord};
pub use types::WeaponCategory;
pub use weapon::{WeaponProfile, WeaponTable};
