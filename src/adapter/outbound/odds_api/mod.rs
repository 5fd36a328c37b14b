//! The Odds API (v4) adapter.
//!
//! - [`dto`] - Wire types for the `/sports/{sport}/odds` response
//! - [`normalize`] - Event-to-[`MatchOdds`](crate::domain::MatchOdds) mapping
//! - [`http`] - `reqwest` implementation of the transport port
//! - [`source`] - [`OddsSource`](crate::port::outbound::odds::OddsSource) with fallback

pub mod dto;
pub mod http;
pub mod normalize;
pub mod source;

pub use http::HttpTransport;
pub use source::OddsApiSource;
