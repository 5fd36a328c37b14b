//! Mapping from provider events to domain matches.
//!
//! The mapping is all-or-nothing: one malformed event fails the whole batch.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::dto::{ErrorBody, OddsEvent, OddsMarket};
use crate::domain::{MatchOdds, Outcome, OutcomePrices, Price};
use crate::error::LoadError;

/// Outcome name the provider uses for a draw.
pub const DRAW_NAME: &str = "Draw";

/// Parse a response body into events.
///
/// # Errors
///
/// Returns `ResponseShapeInvalid` if the body is not a JSON array of events.
pub fn parse_events(body: &str) -> Result<Vec<OddsEvent>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::ResponseShapeInvalid {
        reason: e.to_string(),
    })
}

/// Human-readable reason for a non-2xx response.
#[must_use]
pub fn upstream_reason(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("HTTP {status}: {}", err.message),
        Err(_) => format!("HTTP {status}"),
    }
}

/// Normalize every event, failing the batch on the first bad one.
///
/// # Errors
///
/// Returns `ResponseShapeInvalid` naming the offending event.
pub fn normalize(events: Vec<OddsEvent>, market_key: &str) -> Result<Vec<MatchOdds>, LoadError> {
    events
        .into_iter()
        .map(|event| normalize_event(event, market_key))
        .collect()
}

fn normalize_event(event: OddsEvent, market_key: &str) -> Result<MatchOdds, LoadError> {
    let label = format!("{} vs {}", event.home_team, event.away_team);
    let invalid = |reason: String| LoadError::ResponseShapeInvalid {
        reason: format!("{label}: {reason}"),
    };

    let bookmaker = event
        .bookmakers
        .first()
        .ok_or_else(|| invalid("no bookmaker offers odds".into()))?;
    let market = bookmaker
        .markets
        .iter()
        .find(|m| m.key == market_key)
        .ok_or_else(|| invalid(format!("bookmaker '{}' has no {market_key} market", bookmaker.key)))?;

    let home = outcome_price(market, &event.home_team, Outcome::Home).map_err(&invalid)?;
    let draw = outcome_price(market, DRAW_NAME, Outcome::Draw).map_err(&invalid)?;
    let away = outcome_price(market, &event.away_team, Outcome::Away).map_err(&invalid)?;

    MatchOdds::try_new(
        event.id.into(),
        event.home_team.clone(),
        event.away_team.clone(),
        OutcomePrices::new(home, draw, away),
    )
    .map_err(|e| invalid(e.to_string()))
}

fn outcome_price(market: &OddsMarket, name: &str, outcome: Outcome) -> Result<Price, String> {
    let found = market
        .outcomes
        .iter()
        .find(|o| o.name == name)
        .ok_or_else(|| format!("missing {outcome} outcome '{name}'"))?;
    to_decimal(found.price).ok_or_else(|| format!("unusable price {} for '{name}'", found.price))
}

/// Convert a JSON float through its shortest decimal text, so 2.2 stays 2.2.
fn to_decimal(price: f64) -> Option<Decimal> {
    if !price.is_finite() {
        return None;
    }
    Decimal::from_str(&price.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ONE_EVENT: &str = r#"[{
        "id": "abc",
        "sport_key": "soccer_epl",
        "commence_time": "2026-10-18T14:00:00Z",
        "home_team": "Arsenal",
        "away_team": "Chelsea",
        "bookmakers": [{
            "key": "pinnacle",
            "title": "Pinnacle",
            "markets": [{
                "key": "h2h",
                "outcomes": [
                    {"name": "Chelsea", "price": 3.4},
                    {"name": "Arsenal", "price": 2.1},
                    {"name": "Draw", "price": 3.3}
                ]
            }]
        }]
    }]"#;

    #[test]
    fn maps_outcomes_by_team_name() {
        let events = parse_events(ONE_EVENT).unwrap();
        let matches = normalize(events, "h2h").unwrap();

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.id().as_str(), "abc");
        assert_eq!(m.price_for(Outcome::Home), dec!(2.1));
        assert_eq!(m.price_for(Outcome::Draw), dec!(3.3));
        assert_eq!(m.price_for(Outcome::Away), dec!(3.4));
    }

    #[test]
    fn missing_market_is_shape_error() {
        let events = parse_events(ONE_EVENT).unwrap();
        let err = normalize(events, "spreads").unwrap_err();

        assert!(matches!(err, LoadError::ResponseShapeInvalid { reason } if reason.contains("spreads")));
    }

    #[test]
    fn event_without_bookmakers_is_shape_error() {
        let body = r#"[{"id":"x","home_team":"A","away_team":"B","bookmakers":[]}]"#;
        let err = normalize(parse_events(body).unwrap(), "h2h").unwrap_err();

        assert!(matches!(err, LoadError::ResponseShapeInvalid { reason } if reason.contains("no bookmaker")));
    }

    #[test]
    fn only_first_bookmaker_is_consulted() {
        let body = r#"[{"id":"x","home_team":"A","away_team":"B","bookmakers":[
            {"key":"first","markets":[{"key":"totals","outcomes":[]}]},
            {"key":"second","markets":[{"key":"h2h","outcomes":[
                {"name":"A","price":2.0},{"name":"B","price":2.0},{"name":"Draw","price":3.0}]}]}
        ]}]"#;

        assert!(normalize(parse_events(body).unwrap(), "h2h").is_err());
    }

    #[test]
    fn price_not_above_one_is_shape_error() {
        let body = r#"[{"id":"x","home_team":"A","away_team":"B","bookmakers":[
            {"key":"k","markets":[{"key":"h2h","outcomes":[
                {"name":"A","price":1.0},{"name":"B","price":2.0},{"name":"Draw","price":3.0}]}]}]}]"#;

        assert!(normalize(parse_events(body).unwrap(), "h2h").is_err());
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let body = r#"[{"id":7,"home_team":"A","away_team":"B","bookmakers":[
            {"key":"k","markets":[{"key":"h2h","outcomes":[
                {"name":"A","price":1.9},{"name":"B","price":4.2},{"name":"Draw","price":3.1}]}]}]}]"#;

        let matches = normalize(parse_events(body).unwrap(), "h2h").unwrap();
        assert_eq!(matches[0].id().as_str(), "7");
    }

    #[test]
    fn non_array_body_is_shape_error() {
        assert!(matches!(
            parse_events(r#"{"message":"oops"}"#),
            Err(LoadError::ResponseShapeInvalid { .. })
        ));
    }

    #[test]
    fn upstream_reason_prefers_provider_message() {
        assert_eq!(
            upstream_reason(401, r#"{"message":"API key is not valid"}"#),
            "HTTP 401: API key is not valid"
        );
        assert_eq!(upstream_reason(502, "<html>"), "HTTP 502");
    }
}
