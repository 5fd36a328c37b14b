//! The three results of a two-team match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome code for a 1X2 market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    /// All outcomes in board order.
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// Short 1X2 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Home => "1",
            Self::Draw => "X",
            Self::Away => "2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when text is not an outcome code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcomeError(String);

impl fmt::Display for ParseOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown outcome '{}', expected 1, X, 2, home, draw or away", self.0)
    }
}

impl std::error::Error for ParseOutcomeError {}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "home" => Ok(Self::Home),
            "x" | "draw" => Ok(Self::Draw),
            "2" | "away" => Ok(Self::Away),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}
