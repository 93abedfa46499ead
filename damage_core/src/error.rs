//! Error types for damage calculation

use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by input validation, category lookup and export
#[derive(Error, Debug)]
pub enum DamageError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Unknown weapon category: {0:?}")]
    UnknownCategory(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write export: {0}")]
    Export(#[from] std::io::Error),
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DamageError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DamageError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
