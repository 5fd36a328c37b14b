//! Infrastructure configuration modules.

pub mod betting;
pub mod logging;
pub mod odds;
pub mod settings;
