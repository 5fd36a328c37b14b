//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::adapter::outbound::fallback::fallback_matches;
use crate::domain::{MatchCatalog, MatchId, MatchOdds, OutcomePrices};

/// A match with fixed 2.00 / 3.00 / 4.00 prices.
pub fn match_odds(id: &str, home: &str, away: &str) -> MatchOdds {
    priced_match(id, home, away, OutcomePrices::new(dec!(2.00), dec!(3.00), dec!(4.00)))
}

/// A match with the given prices. Panics on invalid prices.
pub fn priced_match(id: &str, home: &str, away: &str, prices: OutcomePrices) -> MatchOdds {
    MatchOdds::try_new(MatchId::from(id), home, away, prices).expect("valid test prices")
}

/// The four built-in sample matches (ids `1`..`4`).
pub fn sample_matches() -> Vec<MatchOdds> {
    fallback_matches()
}

/// A catalog holding [`sample_matches`].
pub fn sample_catalog() -> MatchCatalog {
    MatchCatalog::from(sample_matches())
}

/// One match per entry, ids `m0`, `m1`, ..., with the entry as the home price.
pub fn catalog_with_prices(home_prices: &[Decimal]) -> MatchCatalog {
    home_prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            priced_match(
                &format!("m{i}"),
                &format!("Home {i}"),
                &format!("Away {i}"),
                OutcomePrices::new(*price, dec!(3.00), dec!(4.00)),
            )
        })
        .collect::<Vec<_>>()
        .into()
}
