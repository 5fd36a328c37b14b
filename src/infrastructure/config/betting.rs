//! Slip arithmetic configuration.

use serde::Deserialize;

use crate::application::calculator::PayoutBasis;

/// Betting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BettingConfig {
    /// How potential winnings are derived from the combined odds.
    #[serde(default)]
    pub payout_basis: PayoutBasis,
}
