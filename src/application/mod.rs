//! Application services (use cases).
//!
//! These services orchestrate domain logic and the odds source port to
//! implement the slip workflow.

pub mod calculator;
pub mod session;
pub mod submission;
