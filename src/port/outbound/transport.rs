//! HTTP transport port used to reach the odds provider.
//!
//! The adapter only needs a status code and the body text; keeping the port
//! this narrow lets tests script responses and count calls.

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET request.
#[async_trait]
pub trait OddsTransport: Send + Sync {
    /// Fetch `url`. Non-2xx statuses are returned as responses, not errors;
    /// only connection-level failures are errors.
    async fn get(&self, url: &Url) -> Result<TransportResponse>;
}
