//! `reqwest` implementation of [`OddsTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use crate::error::Result;
use crate::infrastructure::config::odds::OddsApiConfig;
use crate::port::outbound::transport::{OddsTransport, TransportResponse};

/// HTTP client for the odds provider.
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
        }
    }

    /// Build a client honouring the optional request timeout.
    #[must_use]
    pub fn from_config(config: &OddsApiConfig) -> Self {
        let Some(secs) = config.timeout_secs else {
            return Self::new();
        };

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OddsTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        // The query string carries the API key; keep it out of error messages.
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        debug!(status, bytes = body.len(), "Odds response received");

        Ok(TransportResponse { status, body })
    }
}
