//! Handler for the `play` command: an interactive slip on stdin.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::warn;

use super::input::{SlipCommand, HELP};
use super::{output, render};
use crate::application::session::Session;
use crate::domain::money;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::odds::OddsSource;

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive loop against stdin.
pub async fn execute(config: &Config, source: &dyn OddsSource) -> Result<()> {
    let mut session = Session::new(config.betting.payout_basis);
    run(&mut session, source, BufReader::new(tokio::io::stdin())).await
}

/// Load the catalog, then apply one command per input line until `quit` or EOF.
pub async fn run<R>(session: &mut Session, source: &dyn OddsSource, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    refresh(session, source).await;
    output::note("Type 'help' for commands.");

    let mut lines = reader.lines();
    output::prompt();
    while let Some(line) = lines.next_line().await? {
        match line.parse::<SlipCommand>() {
            Ok(command) => {
                if apply(session, source, command).await == Flow::Quit {
                    break;
                }
            }
            Err(e) => output::error(&e.to_string()),
        }
        output::prompt();
    }
    Ok(())
}

/// Apply one command to the session and print the result.
pub async fn apply(session: &mut Session, source: &dyn OddsSource, command: SlipCommand) -> Flow {
    match command {
        SlipCommand::Pick { match_id, outcome } => match session.select(&match_id, outcome) {
            Ok(selection) => {
                output::success(&render::selection_line(selection));
                let totals = session.totals();
                output::field("Total Odds", output::highlight(totals.display_total_odds()));
            }
            Err(e) => {
                warn!(error = %e, "Pick for unknown match");
                output::error(&e.to_string());
            }
        },
        SlipCommand::Drop { match_id } => match session.deselect(&match_id) {
            Some(removed) => {
                output::success(&format!("Removed {}", render::selection_line(&removed)));
            }
            None => output::warning(&format!("No pick for match {match_id}")),
        },
        SlipCommand::Stake(raw) => {
            session.set_stake(raw);
            let totals = session.totals();
            output::field(
                "Potential Winnings",
                output::highlight(money::display(totals.potential_winnings)),
            );
        }
        SlipCommand::Show => render::slip(session),
        SlipCommand::Place => match session.place_bet() {
            Ok(confirmation) => output::lines(&confirmation.to_string()),
            Err(e) => output::error(&e.to_string()),
        },
        SlipCommand::Clear => {
            session.clear_slip();
            output::success("Slip cleared");
        }
        SlipCommand::Matches => render::matches(session),
        SlipCommand::Refresh => refresh(session, source).await,
        SlipCommand::Help => output::lines(HELP),
        SlipCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

async fn refresh(session: &mut Session, source: &dyn OddsSource) {
    if let Some(notice) = session.refresh(source).await {
        render::notice(notice);
    }
    render::matches(session);
}
