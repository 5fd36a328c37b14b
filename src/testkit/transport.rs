//! Mock [`OddsTransport`] and response builders.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use url::Url;

use crate::error::{Error, Result};
use crate::port::outbound::transport::{OddsTransport, TransportResponse};

/// A transport with a scripted queue of results.
///
/// Each call pops the next result; an exhausted queue answers `200 []`.
pub struct ScriptedTransport {
    results: Mutex<VecDeque<Result<TransportResponse>>>,
    calls: Arc<AtomicU32>,
    urls: Arc<Mutex<Vec<Url>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            calls: Arc::new(AtomicU32::new(0)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response with the given status and body.
    pub fn with_ok(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(TransportResponse::new(status, body)))
    }

    /// Queue a connection-level failure.
    pub fn with_error(self, error: Error) -> Self {
        self.push(Err(error))
    }

    fn push(self, result: Result<TransportResponse>) -> Self {
        self.results
            .lock()
            .expect("lock scripted results")
            .push_back(result);
        self
    }

    /// Shared call counter.
    pub fn calls(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }

    /// Shared log of requested URLs.
    pub fn urls(&self) -> Arc<Mutex<Vec<Url>>> {
        Arc::clone(&self.urls)
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OddsTransport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().expect("lock scripted urls").push(url.clone());
        self.results
            .lock()
            .expect("lock scripted results")
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "[]")))
    }
}

/// One provider event with a single bookmaker offering 2.1 / 3.3 / 3.4.
pub fn odds_event(id: &str, home: &str, away: &str) -> Value {
    json!({
        "id": id,
        "sport_key": "soccer_epl",
        "commence_time": "2026-10-18T14:00:00Z",
        "home_team": home,
        "away_team": away,
        "bookmakers": [{
            "key": "pinnacle",
            "title": "Pinnacle",
            "markets": [{
                "key": "h2h",
                "outcomes": [
                    { "name": home, "price": 2.1 },
                    { "name": away, "price": 3.4 },
                    { "name": "Draw", "price": 3.3 }
                ]
            }]
        }]
    })
}

/// A response body with one event per `(id, home, away)`.
pub fn odds_body(events: &[(&str, &str, &str)]) -> String {
    Value::Array(
        events
            .iter()
            .map(|(id, home, away)| odds_event(id, home, away))
            .collect(),
    )
    .to_string()
}
