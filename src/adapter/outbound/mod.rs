//! Outbound adapters (driven side).

pub mod fallback;
pub mod odds_api;
