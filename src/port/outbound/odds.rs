//! Odds source port.

use async_trait::async_trait;

use super::notice::Notice;
use crate::domain::MatchOdds;

/// Where the catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Live data from the odds provider (possibly empty).
    Remote,
    /// The built-in fixture set.
    Fallback,
}

/// Result of a catalog load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub matches: Vec<MatchOdds>,
    pub source: CatalogSource,
    pub notice: Option<Notice>,
}

impl LoadReport {
    /// True when the provider reported no upcoming fixtures.
    ///
    /// The front-end shows a "no matches" state rather than sample data.
    #[must_use]
    pub fn is_empty_remote(&self) -> bool {
        self.source == CatalogSource::Remote && self.matches.is_empty()
    }
}

/// Produces matches-with-odds.
///
/// Implementations absorb every failure: the worst case is the fallback set
/// plus an error notice.
#[async_trait]
pub trait OddsSource: Send + Sync {
    async fn load(&self) -> LoadReport;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}
