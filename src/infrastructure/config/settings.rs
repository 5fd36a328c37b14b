//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the odds provider key (`ODDS_API_KEY`).
//!
//! # Example
//!
//! ```no_run
//! use parlay::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::betting::BettingConfig;
use super::logging::LoggingConfig;
use super::odds::OddsApiConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; a missing file section falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Odds provider request settings.
    #[serde(default)]
    pub odds: OddsApiConfig,

    /// Slip arithmetic settings.
    #[serde(default)]
    pub betting: BettingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from the `ODDS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never from the config file
        config.odds.load_api_key_from_env();

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus the API key from the environment, for runs without a file.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.odds.load_api_key_from_env();
        config
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.odds.validate()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
