//! Monetary types and the two-decimal display convention.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal (European) odds: the payout multiplier for a winning stake.
pub type Price = Decimal;

/// An amount of money: stakes and winnings.
pub type Amount = Decimal;

/// Number of fractional digits shown for odds and amounts.
pub const DISPLAY_DP: u32 = 2;

/// Largest amount the engine produces: every 96-bit mantissa at two decimals.
///
/// Anything larger could not be shown with two fractional digits.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, DISPLAY_DP);

/// Clamp a value into `-MAX_AMOUNT..=MAX_AMOUNT`.
#[must_use]
pub fn saturate(value: Decimal) -> Decimal {
    value.clamp(-MAX_AMOUNT, MAX_AMOUNT)
}

/// Round a value the way it is shown to the user.
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a value with exactly two fractional digits.
///
/// Values beyond [`MAX_AMOUNT`] are shown as the bound.
#[must_use]
pub fn display(value: Decimal) -> String {
    let mut rounded = round_for_display(saturate(value));
    rounded.rescale(DISPLAY_DP);
    rounded.to_string()
}
