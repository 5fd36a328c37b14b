#![allow(dead_code)]

pub mod http;

use parlay::infrastructure::config::odds::OddsApiConfig;

/// Odds config with a usable API key, pointed at `base_url`.
pub fn keyed_config(base_url: &str) -> OddsApiConfig {
    OddsApiConfig {
        base_url: base_url.to_string(),
        api_key: Some("integration-key".into()),
        ..Default::default()
    }
}
