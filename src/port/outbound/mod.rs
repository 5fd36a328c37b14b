//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod notice;
pub mod odds;
pub mod transport;
