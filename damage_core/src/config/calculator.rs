//! Calculator configuration: tempering model and weapon table overrides

use super::ConfigError;
use crate::formula::TemperingModel;
use crate::weapon::{WeaponOverrides, WeaponTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub tempering_model: TemperingModel,
    #[serde(default)]
    pub weapons: WeaponOverrides,
}

impl CalculatorConfig {
    /// Weapon table with this config's overrides applied
    pub fn weapon_table(&self) -> Result<WeaponTable, ConfigError> {
        WeaponTable::with_overrides(&self.weapons)
    }
}

/// Load calculator configuration from a TOML file
pub fn load_calculator_config(path: &Path) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = super::load_toml(path)?;
    config.weapon_table()?;
    tracing::info!(
        path = %path.display(),
        model = config.tempering_model.name(),
        "loaded calculator config"
    );
    Ok(config)
}

/// Load calculator configuration from a TOML string
pub fn parse_calculator_config(content: &str) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = super::parse_toml(content)?;
    config.weapon_table()?;
    Ok(config)
}

/// Get the shipped default configuration
pub fn default_config() -> CalculatorConfig {
    let toml = include_str!("../../config/damage.toml");
    parse_calculator_config(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled damage.toml is invalid, using built-in defaults");
        CalculatorConfig::default()
    })
}
