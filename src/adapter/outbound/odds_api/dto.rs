//! Odds API data transfer objects.
//!
//! Example response element (fields not listed here are ignored):
//! ```json
//! {"id":"e912...","home_team":"Arsenal","away_team":"Chelsea",
//!  "bookmakers":[{"key":"pinnacle","markets":[{"key":"h2h",
//!    "outcomes":[{"name":"Arsenal","price":2.1},{"name":"Chelsea","price":3.4},{"name":"Draw","price":3.3}]}]}]}
//! ```

use serde::Deserialize;

use crate::domain::MatchId;

/// Event identifier as sent by the provider: usually a string, sometimes numeric.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Text(String),
    Number(u64),
}

impl From<EventId> for MatchId {
    fn from(id: EventId) -> Self {
        match id {
            EventId::Text(s) => MatchId::new(s),
            EventId::Number(n) => MatchId::new(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsEvent {
    pub id: EventId,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsBookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsOutcome {
    pub name: String,
    pub price: f64,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
