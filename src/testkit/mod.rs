//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for matches and catalogs.
//! - [`transport`] - [`ScriptedTransport`](transport::ScriptedTransport), a mock
//!   [`OddsTransport`](crate::port::outbound::transport::OddsTransport) that
//!   counts calls, plus response body builders.

pub mod domain;
pub mod transport;
