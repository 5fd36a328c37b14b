//! Built-in fixture set shown whenever live odds are unavailable.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use crate::domain::{MatchId, MatchOdds, OutcomePrices};
use crate::port::outbound::notice::Notice;
use crate::port::outbound::odds::{CatalogSource, LoadReport, OddsSource};

const FIXTURES: [(u32, &str, &str, [Decimal; 3]); 4] = [
    (1, "Bayern Munich", "Borussia Dortmund", [dec!(1.50), dec!(4.00), dec!(6.00)]),
    (2, "Real Madrid", "FC Barcelona", [dec!(2.20), dec!(3.50), dec!(3.00)]),
    (3, "Manchester United", "Liverpool FC", [dec!(3.80), dec!(3.90), dec!(1.90)]),
    (4, "Juventus", "AC Milan", [dec!(2.50), dec!(3.20), dec!(2.80)]),
];

/// The sample matches, freshly built on every call.
#[must_use]
pub fn fallback_matches() -> Vec<MatchOdds> {
    FIXTURES
        .iter()
        .filter_map(|(id, home, away, [h, d, a])| {
            MatchOdds::try_new(MatchId::from(*id), *home, *away, OutcomePrices::new(*h, *d, *a))
                .ok()
        })
        .collect()
}

/// Offline source that always serves the sample matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackSource;

#[async_trait]
impl OddsSource for FallbackSource {
    async fn load(&self) -> LoadReport {
        info!("Offline mode, using sample matches");
        LoadReport {
            matches: fallback_matches(),
            source: CatalogSource::Fallback,
            notice: Some(Notice::info("Offline mode, showing sample matches")),
        }
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
