//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌───────────────┐      ┌────────────────┐
//!   │  Session     │ ───▶ │  OddsSource   │ ───▶ │ OddsTransport  │
//!   │ (application)│      │  (odds port)  │      │  (HTTP port)   │
//!   └──────────────┘      └───────────────┘      └────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::odds::OddsSource`] - Produces the match catalog, never fails
//! - [`outbound::transport::OddsTransport`] - Opaque HTTP GET used by the odds API adapter
//! - [`outbound::notice::Notice`] - Load-status messages for the front-end

pub mod outbound;
