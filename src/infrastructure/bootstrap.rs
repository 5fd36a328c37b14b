//! Composition root: builds the odds source from configuration.

use tracing::info;

use crate::adapter::outbound::fallback::FallbackSource;
use crate::adapter::outbound::odds_api::{HttpTransport, OddsApiSource};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::odds::OddsSource;

/// Build the odds source for this run.
///
/// `offline` short-circuits to the sample matches. Otherwise the live source
/// is used even without an API key; it then serves the fallback set itself
/// and reports why.
#[must_use]
pub fn build_odds_source(config: &Config, offline: bool) -> Box<dyn OddsSource> {
    if offline {
        info!("Offline mode requested");
        return Box::new(FallbackSource);
    }

    let transport = HttpTransport::from_config(&config.odds);
    Box::new(OddsApiSource::new(config.odds.clone(), transport))
}
