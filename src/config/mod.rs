//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `CHOICE_CANVAS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use choice_canvas::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Row minimum extent: {}", config.layout.row_min_extent);
//! ```

mod error;
mod layout;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use layout::LayoutConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section carries defaults, so a board runs with no environment
/// at all. Load using [`AppConfig::load()`] which reads from environment
/// variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Layout geometry (minimum extents, gap, origin)
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Scoring bounds (weight band, importance scale)
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHOICE_CANVAS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHOICE_CANVAS__LAYOUT__ITEM_GAP=12` -> `layout.item_gap = 12`
    /// - `CHOICE_CANVAS__SCORING__WEIGHT_MAX=3` -> `scoring.weight_max = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHOICE_CANVAS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.layout.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CHOICE_CANVAS__LAYOUT__ROW_MIN_EXTENT");
        env::remove_var("CHOICE_CANVAS__LAYOUT__COLUMN_MIN_EXTENT");
        env::remove_var("CHOICE_CANVAS__LAYOUT__ITEM_GAP");
        env::remove_var("CHOICE_CANVAS__SCORING__WEIGHT_MIN");
        env::remove_var("CHOICE_CANVAS__SCORING__WEIGHT_MAX");
        env::remove_var("CHOICE_CANVAS__SCORING__IMPORTANCE_STEPS");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.layout.row_min_extent, 56.0);
        assert_eq!(config.layout.column_min_extent, 88.0);
        assert_eq!(config.layout.item_gap, 8.0);
        assert_eq!(config.scoring.weight_min, 1.0);
        assert_eq!(config.scoring.weight_max, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHOICE_CANVAS__LAYOUT__ITEM_GAP", "12.5");
        env::set_var("CHOICE_CANVAS__SCORING__WEIGHT_MAX", "3.0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.layout.item_gap, 12.5);
        assert_eq!(config.scoring.weight_max, 3.0);
    }

    #[test]
    fn test_load_from_env_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "CHOICE_CANVAS__LAYOUT__ROW_MIN_EXTENT=40.0\n").unwrap();
        dotenvy::from_path(&path).unwrap();

        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.layout.row_min_extent, 40.0);
    }

    #[test]
    fn test_validate_rejects_bad_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHOICE_CANVAS__SCORING__WEIGHT_MIN", "5.0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
