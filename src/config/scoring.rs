//! Scoring and weight band configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Bounds for weights and the discrete importance scale
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Smallest weight a resize gesture may produce
    #[serde(default = "default_weight_min")]
    pub weight_min: f64,

    /// Largest weight a resize gesture may produce
    #[serde(default = "default_weight_max")]
    pub weight_max: f64,

    /// Number of steps on the discrete importance scale
    #[serde(default = "default_importance_steps")]
    pub importance_steps: u8,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weight_min <= 0.0 {
            return Err(ValidationError::InvalidWeightMin);
        }
        if self.weight_min > self.weight_max {
            return Err(ValidationError::InvalidWeightBand);
        }
        if self.importance_steps < 2 {
            return Err(ValidationError::InvalidImportanceSteps);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_min: default_weight_min(),
            weight_max: default_weight_max(),
            importance_steps: default_importance_steps(),
        }
    }
}

fn default_weight_min() -> f64 {
    1.0
}

fn default_weight_max() -> f64 {
    2.0
}

fn default_importance_steps() -> u8 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_config_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.weight_min, 1.0);
        assert_eq!(config.weight_max, 2.0);
        assert_eq!(config.importance_steps, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_positive_minimum() {
        let config = ScoringConfig {
            weight_min: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_band() {
        let config = ScoringConfig {
            weight_min: 3.0,
            weight_max: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_degenerate_scale() {
        let config = ScoringConfig {
            importance_steps: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
