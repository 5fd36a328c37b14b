//! Exchange-agnostic domain logic: matches, selections and the slip.

pub mod catalog;
pub mod error;
pub mod fixture;
pub mod id;
pub mod money;
pub mod outcome;
pub mod selection;
pub mod slip;
pub mod stake;

// Core domain types
pub use catalog::MatchCatalog;
pub use fixture::{MatchOdds, OutcomePrices};
pub use id::MatchId;
pub use money::{Amount, Price};
pub use outcome::Outcome;
pub use selection::Selection;
pub use slip::Slip;
pub use stake::StakeInput;
