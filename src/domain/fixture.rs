//! A fixture and its 1X2 prices.
//!
//! - [`OutcomePrices`] - One decimal price per outcome
//! - [`MatchOdds`] - A match with display names and validated prices

use std::result::Result;

use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::MatchId;
use super::money::Price;
use super::outcome::Outcome;

/// Decimal odds for each of the three outcomes.
///
/// Holding one field per outcome makes a missing or duplicated price
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomePrices {
    home: Price,
    draw: Price,
    away: Price,
}

impl OutcomePrices {
    /// Create a price set. Values are checked by [`MatchOdds::try_new`].
    #[must_use]
    pub const fn new(home: Price, draw: Price, away: Price) -> Self {
        Self { home, draw, away }
    }

    /// Price for a single outcome.
    #[must_use]
    pub const fn get(&self, outcome: Outcome) -> Price {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }
}

/// One fixture's wagering options.
///
/// Immutable once built; a catalog refresh replaces every `MatchOdds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOdds {
    id: MatchId,
    home_team: String,
    away_team: String,
    prices: OutcomePrices,
}

impl MatchOdds {
    /// Create a match with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - every price must be greater than 1
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PriceNotAboveOne` for the first offending outcome.
    pub fn try_new(
        id: MatchId,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        prices: OutcomePrices,
    ) -> Result<Self, DomainError> {
        for outcome in Outcome::ALL {
            let price = prices.get(outcome);
            if price <= Decimal::ONE {
                return Err(DomainError::PriceNotAboveOne { outcome, price });
            }
        }

        Ok(Self {
            id,
            home_team: home_team.into(),
            away_team: away_team.into(),
            prices,
        })
    }

    #[must_use]
    pub const fn id(&self) -> &MatchId {
        &self.id
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub const fn prices(&self) -> &OutcomePrices {
        &self.prices
    }

    /// Decimal odds for the given outcome.
    #[must_use]
    pub const fn price_for(&self, outcome: Outcome) -> Price {
        self.prices.get(outcome)
    }

    /// "Home vs Away" label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn prices() -> OutcomePrices {
        OutcomePrices::new(dec!(2.20), dec!(3.50), dec!(3.00))
    }

    #[test]
    fn price_for_maps_each_outcome() {
        let m = MatchOdds::try_new(MatchId::from(2), "Real Madrid", "FC Barcelona", prices())
            .unwrap();

        assert_eq!(m.price_for(Outcome::Home), dec!(2.20));
        assert_eq!(m.price_for(Outcome::Draw), dec!(3.50));
        assert_eq!(m.price_for(Outcome::Away), dec!(3.00));
        assert_eq!(m.label(), "Real Madrid vs FC Barcelona");
    }

    #[test]
    fn try_new_rejects_price_of_exactly_one() {
        let result = MatchOdds::try_new(
            MatchId::from(1),
            "A",
            "B",
            OutcomePrices::new(dec!(1.00), dec!(3.0), dec!(4.0)),
        );

        assert_eq!(
            result,
            Err(DomainError::PriceNotAboveOne {
                outcome: Outcome::Home,
                price: dec!(1.00),
            })
        );
    }

    #[test]
    fn try_new_rejects_negative_away_price() {
        let result = MatchOdds::try_new(
            MatchId::from(1),
            "A",
            "B",
            OutcomePrices::new(dec!(2.0), dec!(3.0), dec!(-4.0)),
        );

        assert!(matches!(
            result,
            Err(DomainError::PriceNotAboveOne {
                outcome: Outcome::Away,
                ..
            })
        ));
    }
}
