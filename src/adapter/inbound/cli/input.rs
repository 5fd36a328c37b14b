//! Line grammar for the interactive slip.
//!
//! Each line is one action against the session:
//!
//! ```text
//! pick <match-id> <1|X|2|home|draw|away>
//! drop <match-id>
//! stake [amount]
//! slip | place | clear | matches | refresh | help | quit
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::domain::outcome::ParseOutcomeError;
use crate::domain::{MatchId, Outcome};

/// A parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlipCommand {
    Pick { match_id: MatchId, outcome: Outcome },
    Drop { match_id: MatchId },
    Stake(String),
    Show,
    Place,
    Clear,
    Matches,
    Refresh,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Outcome(#[from] ParseOutcomeError),
}

pub const HELP: &str = "\
pick <match-id> <1|X|2>   select an outcome (replaces any pick for that match)
drop <match-id>           remove the pick for a match
stake [amount]            set the stake (no amount clears it)
slip                      show the slip and totals
place                     place the bet
clear                     empty the slip
matches                   list matches
refresh                   reload odds
quit                      leave";

impl FromStr for SlipCommand {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Show);
        };

        match verb.to_ascii_lowercase().as_str() {
            "pick" | "p" => {
                let (Some(id), Some(outcome), None) = (words.next(), words.next(), words.next())
                else {
                    return Err(InputError::Usage("pick <match-id> <1|X|2>"));
                };
                Ok(Self::Pick {
                    match_id: MatchId::from(id),
                    outcome: outcome.parse()?,
                })
            }
            "drop" => match (words.next(), words.next()) {
                (Some(id), None) => Ok(Self::Drop {
                    match_id: MatchId::from(id),
                }),
                _ => Err(InputError::Usage("drop <match-id>")),
            },
            // The stake is free text; keep everything after the verb.
            "stake" => Ok(Self::Stake(words.collect::<Vec<_>>().join(" "))),
            "slip" | "show" => Ok(Self::Show),
            "place" | "bet" => Ok(Self::Place),
            "clear" => Ok(Self::Clear),
            "matches" | "list" => Ok(Self::Matches),
            "refresh" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(InputError::Unknown(other.to_string())),
        }
    }
}
