//! Combined odds and payout arithmetic.
//!
//! Pure functions over slip selections. Values keep full precision; rounding
//! happens only for display, unless [`PayoutBasis::DisplayedOdds`] asks for
//! the legacy behaviour.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::money::{self, round_for_display, MAX_AMOUNT};
use crate::domain::{Amount, Price, Selection, StakeInput};

/// Which combined-odds value potential winnings are computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutBasis {
    /// The unrounded product of the selection prices.
    #[default]
    Exact,
    /// The combined odds after rounding to two decimals, as displayed.
    DisplayedOdds,
}

impl PayoutBasis {
    /// The odds value used as the payout multiplier.
    #[must_use]
    pub fn payout_odds(self, total_odds: Price) -> Price {
        match self {
            Self::Exact => total_odds,
            Self::DisplayedOdds => round_for_display(total_odds),
        }
    }
}

/// Product of every selection price; `1` for an empty slip.
///
/// Saturates at [`MAX_AMOUNT`] instead of overflowing.
#[must_use]
pub fn total_odds(selections: &[Selection]) -> Price {
    selections.iter().fold(Decimal::ONE, |acc, s| {
        acc.checked_mul(s.price()).map_or(MAX_AMOUNT, money::saturate)
    })
}

/// `total_odds × stake`, with a missing or negative stake counted as zero.
#[must_use]
pub fn potential_winnings(total_odds: Price, stake: Option<Amount>) -> Amount {
    let stake = stake
        .filter(|s| *s >= Decimal::ZERO)
        .unwrap_or(Decimal::ZERO);
    total_odds
        .checked_mul(stake)
        .map_or(MAX_AMOUNT, money::saturate)
}

/// The three figures shown under the slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlipTotals {
    pub total_odds: Price,
    pub stake: Amount,
    pub potential_winnings: Amount,
}

impl SlipTotals {
    /// Compute totals for the current selections and stake input.
    #[must_use]
    pub fn compute(selections: &[Selection], stake: &StakeInput, basis: PayoutBasis) -> Self {
        let total_odds = total_odds(selections);
        let stake = stake.amount_or_zero();
        let potential_winnings = potential_winnings(basis.payout_odds(total_odds), Some(stake));

        Self {
            total_odds,
            stake,
            potential_winnings,
        }
    }

    #[must_use]
    pub fn display_total_odds(&self) -> String {
        money::display(self.total_odds)
    }

    #[must_use]
    pub fn display_stake(&self) -> String {
        money::display(self.stake)
    }

    #[must_use]
    pub fn display_winnings(&self) -> String {
        money::display(self.potential_winnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchId, Outcome, Slip};
    use crate::testkit::domain::{catalog_with_prices, sample_catalog};
    use rust_decimal_macros::dec;

    fn slip_with(prices: &[Decimal]) -> Slip {
        let catalog = catalog_with_prices(prices);
        let mut slip = Slip::new();
        for m in catalog.matches() {
            slip.select(&catalog, m.id(), Outcome::Home).unwrap();
        }
        slip
    }

    #[test]
    fn empty_slip_has_identity_odds() {
        assert_eq!(total_odds(&[]), Decimal::ONE);
    }

    #[test]
    fn total_odds_is_product_of_prices() {
        let slip = slip_with(&[dec!(2.2), dec!(3.9), dec!(1.5)]);
        assert_eq!(total_odds(slip.selections()), dec!(12.87));
    }

    #[test]
    fn winnings_multiply_odds_by_stake() {
        let winnings = potential_winnings(dec!(12.87), Some(dec!(10)));
        assert_eq!(winnings, dec!(128.70));
        assert_eq!(money::display(winnings), "128.70");
    }

    #[test]
    fn invalid_stake_yields_zero_winnings() {
        assert_eq!(potential_winnings(dec!(12.87), None), Decimal::ZERO);
        assert_eq!(potential_winnings(dec!(12.87), Some(dec!(-5))), Decimal::ZERO);

        let totals = SlipTotals::compute(&[], &StakeInput::from("abc"), PayoutBasis::Exact);
        assert_eq!(totals.display_winnings(), "0.00");
    }

    #[test]
    fn displayed_odds_basis_rounds_before_multiplying() {
        let catalog = sample_catalog();
        let mut slip = Slip::new();
        slip.select(&catalog, &MatchId::from(1), Outcome::Home).unwrap();
        slip.select(&catalog, &MatchId::from(3), Outcome::Draw).unwrap();
        let stake = StakeInput::from("100");

        let exact = SlipTotals::compute(slip.selections(), &stake, PayoutBasis::Exact);
        let shown = SlipTotals::compute(slip.selections(), &stake, PayoutBasis::DisplayedOdds);

        assert_eq!(exact.total_odds, dec!(5.85));
        assert_eq!(exact.potential_winnings, dec!(585));
        assert_eq!(shown.potential_winnings, dec!(585));

        // 1.5 * 1.9 * 3.5 = 9.975, shown as 9.98
        slip.select(&catalog, &MatchId::from(3), Outcome::Away).unwrap();
        slip.select(&catalog, &MatchId::from(2), Outcome::Draw).unwrap();
        let exact = SlipTotals::compute(slip.selections(), &stake, PayoutBasis::Exact);
        let shown = SlipTotals::compute(slip.selections(), &stake, PayoutBasis::DisplayedOdds);

        assert_eq!(exact.total_odds, dec!(9.975));
        assert_eq!(exact.potential_winnings, dec!(997.5));
        assert_eq!(shown.potential_winnings, dec!(998));
        assert_eq!(shown.display_total_odds(), "9.98");
    }

    #[test]
    fn total_odds_saturates_instead_of_overflowing() {
        let slip = slip_with(&[dec!(1000000000); 5]);
        assert_eq!(total_odds(slip.selections()), MAX_AMOUNT);
    }

    #[test]
    fn saturated_totals_still_display_two_decimals() {
        let slip = slip_with(&[dec!(1000000000); 3]);
        let totals = SlipTotals::compute(slip.selections(), &StakeInput::from("1e20"), PayoutBasis::Exact);

        assert_eq!(totals.potential_winnings, MAX_AMOUNT);
        assert_eq!(totals.display_winnings(), "792281625142643375935439503.35");
        assert_eq!(totals.display_stake(), "100000000000000000000.00");
    }
}
