//! Configuration loading from TOML files
//!
//! Calculator settings (tempering model, weapon table overrides) and weapon
//! setups are both plain TOML documents.

mod calculator;

pub use calculator::{
    default_config, load_calculator_config, parse_calculator_config, CalculatorConfig,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error loading calculator configuration or damage inputs from TOML
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid calculator config: {0}")]
    ValidationError(String),
}

/// Read a TOML file into any deserializable type
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize a TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load saved damage inputs (one weapon setup) from a TOML file
pub fn load_inputs(path: &Path) -> Result<crate::formula::DamageInputs, ConfigError> {
    let inputs: crate::formula::DamageInputs = load_toml(path)?;
    inputs
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(inputs)
}
