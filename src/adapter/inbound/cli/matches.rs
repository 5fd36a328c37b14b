//! Handler for the `matches` command.

use super::render;
use crate::application::session::Session;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::odds::OddsSource;

/// Load the catalog once and print it.
pub async fn execute(config: &Config, source: &dyn OddsSource) -> Result<()> {
    let mut session = Session::new(config.betting.payout_basis);
    if let Some(notice) = session.refresh(source).await {
        render::notice(notice);
    }
    render::matches(&session);
    Ok(())
}
