//! Free-text stake input.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::money::Amount;

/// The stake exactly as typed, parsed on demand.
///
/// Parsing never fails loudly: anything that is not a number reads as
/// "no amount".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakeInput {
    raw: String,
}

impl StakeInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The text as entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Replace the entered text.
    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Reset to the empty input.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// The parsed number, if the text is one. May be zero or negative.
    #[must_use]
    pub fn amount(&self) -> Option<Amount> {
        parse_amount(&self.raw)
    }

    /// The amount usable for a payout preview: negative or missing counts as zero.
    #[must_use]
    pub fn amount_or_zero(&self) -> Amount {
        self.amount()
            .filter(|a| *a >= Decimal::ZERO)
            .unwrap_or(Decimal::ZERO)
    }

    /// The amount if it can be wagered (strictly positive).
    #[must_use]
    pub fn wager(&self) -> Option<Amount> {
        self.amount().filter(|a| *a > Decimal::ZERO)
    }
}

impl From<&str> for StakeInput {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Trim, drop `,` separators, then read plain or scientific notation.
///
/// `_` is not a separator here even though `Decimal::from_str` skips it.
fn parse_amount(raw: &str) -> Option<Amount> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned.contains('_') {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}
