//! Parlay - a betting-slip engine for 1X2 football markets.
//!
//! Users pick one outcome (home, draw, away) per match; the picks form a
//! slip whose combined decimal odds and potential winnings are derived on
//! demand. Matches come from The Odds API, or from a built-in sample set
//! whenever live data is unavailable.
//!
//! # Architecture
//!
//! - **`domain`** - Matches, outcomes, selections, the slip and stake input
//! - **`application`** - Calculator, submission validation and the `Session`
//! - **`port`** - Odds source and HTTP transport traits, load notices
//! - **`adapter`** - The Odds API client, the fallback set, and the terminal front-end
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use parlay::adapter::outbound::fallback::FallbackSource;
//! use parlay::application::calculator::PayoutBasis;
//! use parlay::application::session::Session;
//! use parlay::domain::{MatchId, Outcome};
//!
//! # tokio_test::block_on(async {
//! let mut session = Session::new(PayoutBasis::Exact);
//! session.refresh(&FallbackSource).await;
//!
//! session.select(&MatchId::from(2), Outcome::Home).unwrap();
//! session.set_stake("10");
//! assert_eq!(session.totals().display_winnings(), "22.00");
//! # });
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
