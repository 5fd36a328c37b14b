//! Odds source backed by The Odds API, degrading to the fallback set.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::normalize::{normalize, parse_events, upstream_reason};
use crate::adapter::outbound::fallback::fallback_matches;
use crate::domain::MatchOdds;
use crate::error::LoadError;
use crate::infrastructure::config::odds::OddsApiConfig;
use crate::port::outbound::notice::Notice;
use crate::port::outbound::odds::{CatalogSource, LoadReport, OddsSource};
use crate::port::outbound::transport::OddsTransport;

/// Live odds source.
///
/// Issues at most one request per [`load`](OddsSource::load). Without a
/// configured API key no request is made at all.
pub struct OddsApiSource<T> {
    config: OddsApiConfig,
    transport: T,
}

impl<T: OddsTransport> OddsApiSource<T> {
    pub fn new(config: OddsApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    async fn fetch(&self) -> Result<Vec<MatchOdds>, LoadError> {
        let api_key = self
            .config
            .credential()
            .ok_or(LoadError::ConfigurationMissing)?;
        let url = self
            .config
            .odds_url(api_key)
            .map_err(|e| LoadError::RemoteRequestFailed {
                reason: e.to_string(),
            })?;

        debug!(sport = %self.config.sport, regions = %self.config.regions, "Fetching odds");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| LoadError::RemoteRequestFailed {
                reason: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(LoadError::RemoteRequestFailed {
                reason: upstream_reason(response.status, &response.body),
            });
        }

        let events = parse_events(&response.body)?;
        normalize(events, &self.config.market)
    }
}

#[async_trait]
impl<T: OddsTransport> OddsSource for OddsApiSource<T> {
    async fn load(&self) -> LoadReport {
        match self.fetch().await {
            Ok(matches) if matches.is_empty() => {
                info!(sport = %self.config.sport, "No upcoming matches");
                LoadReport {
                    matches,
                    source: CatalogSource::Remote,
                    notice: Some(Notice::info("No upcoming matches")),
                }
            }
            Ok(matches) => {
                info!(count = matches.len(), sport = %self.config.sport, "Loaded live odds");
                LoadReport {
                    matches,
                    source: CatalogSource::Remote,
                    notice: None,
                }
            }
            Err(err) => {
                match &err {
                    LoadError::ConfigurationMissing => info!("{err}"),
                    _ => warn!(error = %err, "Odds load failed, using fallback matches"),
                }
                LoadReport {
                    matches: fallback_matches(),
                    source: CatalogSource::Fallback,
                    notice: Some(Notice::from(&err)),
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "the-odds-api"
    }
}
