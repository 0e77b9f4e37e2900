//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `AYURVEDA` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use ayur_wellness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod api;
mod error;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Durable record storage (data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Wellness backend API (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads
    /// variables with the `AYURVEDA` prefix:
    ///
    /// - `AYURVEDA__STORAGE__DATA_DIR=./data` -> `storage.data_dir`
    /// - `AYURVEDA__API__BASE_URL=...` -> `api.base_url`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AYURVEDA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}
