//! One user pick taken from a [`MatchOdds`].

use super::fixture::MatchOdds;
use super::id::MatchId;
use super::money::Price;
use super::outcome::Outcome;

/// A pick with its team names and price frozen at selection time.
///
/// The copy keeps the slip renderable after the catalog is refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    match_id: MatchId,
    home_team: String,
    away_team: String,
    outcome: Outcome,
    price: Price,
}

impl Selection {
    /// Take a selection from a match.
    #[must_use]
    pub fn from_match(odds: &MatchOdds, outcome: Outcome) -> Self {
        Self {
            match_id: odds.id().clone(),
            home_team: odds.home_team().to_string(),
            away_team: odds.away_team().to_string(),
            outcome,
            price: odds.price_for(outcome),
        }
    }

    #[must_use]
    pub const fn match_id(&self) -> &MatchId {
        &self.match_id
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
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}
