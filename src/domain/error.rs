//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when an invariant is
//! violated.
//!
//! # Examples
//!
//! ```
//! use parlay::domain::error::DomainError;
//! use parlay::domain::fixture::{MatchOdds, OutcomePrices};
//! use parlay::domain::id::MatchId;
//! use rust_decimal_macros::dec;
//!
//! let result = MatchOdds::try_new(
//!     MatchId::from(1),
//!     "Juventus",
//!     "AC Milan",
//!     OutcomePrices::new(dec!(2.50), dec!(1.00), dec!(2.80)),
//! );
//!
//! assert!(matches!(result, Err(DomainError::PriceNotAboveOne { .. })));
//! ```

use thiserror::Error;

use super::outcome::Outcome;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Decimal odds are a payout multiplier and must exceed 1.
    #[error("price for {outcome} must be greater than 1, got {price}")]
    PriceNotAboveOne {
        /// The outcome carrying the invalid price.
        outcome: Outcome,
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },
}
