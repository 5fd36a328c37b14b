//! Bet submission validation.

use std::fmt;

use crate::application::calculator::{PayoutBasis, SlipTotals};
use crate::domain::money;
use crate::domain::{Amount, Price, Selection, Slip, StakeInput};
use crate::error::SubmitError;

/// Summary of an accepted bet. There is no settlement behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetConfirmation {
    pub total_odds: Price,
    pub stake: Amount,
    pub potential_winnings: Amount,
    pub selections: Vec<Selection>,
}

impl fmt::Display for BetConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bet placed successfully!")?;
        writeln!(f)?;
        writeln!(f, "Total Odds: {}", money::display(self.total_odds))?;
        writeln!(f, "Stake: {}", money::display(self.stake))?;
        write!(
            f,
            "Potential Winnings: {}",
            money::display(self.potential_winnings)
        )
    }
}

/// Check a slip and stake for submission.
///
/// Checks run in order: the slip must hold at least one selection, then the
/// stake must parse to a number greater than zero. Nothing is mutated; the
/// caller resets its state on success.
///
/// # Errors
///
/// Returns [`SubmitError::EmptySlip`] or [`SubmitError::InvalidStake`].
pub fn validate(
    slip: &Slip,
    stake: &StakeInput,
    basis: PayoutBasis,
) -> Result<BetConfirmation, SubmitError> {
    if slip.is_empty() {
        return Err(SubmitError::EmptySlip);
    }

    let wager = stake.wager().ok_or(SubmitError::InvalidStake)?;
    let totals = SlipTotals::compute(slip.selections(), stake, basis);

    Ok(BetConfirmation {
        total_odds: totals.total_odds,
        stake: wager,
        potential_winnings: totals.potential_winnings,
        selections: slip.selections().to_vec(),
    })
}
