//! Odds provider configuration.

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// Settings for The Odds API (v4) request.
///
/// One sport, one region list and one market are fetched per load.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// Base URL up to and including `/sports`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sport key, e.g. `soccer_epl`.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Comma-separated bookmaker regions.
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Market key; head-to-head is the only one the slip understands.
    #[serde(default = "default_market")]
    pub market: String,
    /// Optional request timeout. Unset means no cap.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Loaded from [`API_KEY_ENV`], never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com/v4/sports".into()
}

fn default_sport() -> String {
    "soccer_epl".into()
}

fn default_regions() -> String {
    "eu".into()
}

fn default_market() -> String {
    "h2h".into()
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            market: default_market(),
            timeout_secs: None,
            api_key: None,
        }
    }
}

impl OddsApiConfig {
    /// The API key if one is set and not blank.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Read the API key from the environment.
    pub fn load_api_key_from_env(&mut self) {
        self.api_key = std::env::var(API_KEY_ENV).ok();
    }

    /// Build the odds endpoint for the configured sport.
    ///
    /// # Errors
    ///
    /// Returns a URL error if `base_url` is not absolute.
    pub fn odds_url(&self, api_key: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse_with_params(
            &format!("{base}/{}/odds", self.sport),
            &[
                ("apiKey", api_key),
                ("regions", self.regions.as_str()),
                ("markets", self.market.as_str()),
                ("oddsFormat", "decimal"),
            ],
        )?;
        Ok(url)
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("base_url", &self.base_url),
            ("sport", &self.sport),
            ("regions", &self.regions),
            ("market", &self.market),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
