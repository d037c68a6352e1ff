//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Minimum extent must be positive")]
    InvalidMinExtent,

    #[error("Item gap must not be negative")]
    InvalidItemGap,

    #[error("Layout origin must be finite")]
    InvalidOrigin,

    #[error("Weight band minimum must be positive")]
    InvalidWeightMin,

    #[error("Weight band minimum exceeds maximum")]
    InvalidWeightBand,

    #[error("Importance scale needs at least two steps")]
    InvalidImportanceSteps,
}
