//! HTTP implementation of [`TrackerApi`] on top of `reqwest`

use super::TrackerApi;
use crate::config::{HOOK_TOKEN_HEADER, TrackerConfig};
use crate::error::{RelayError, RelayResult};
use crate::track::{TrackRequest, TrackResponse};
use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;
use tracing::{debug, error};

/// Tracker client bound to one configured endpoint
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: Client,
    config: TrackerConfig,
}

impl TrackerClient {
    /// Create a client for the given tracker configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: TrackerConfig) -> RelayResult<Self> {
        let http = Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .user_agent(concat!("tracklink/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::config(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            "Created tracker client for {} with timeout={:?}, token={}",
            config.convert_url(),
            config.timeout(),
            if config.hook_token().is_some() { "set" } else { "unset" }
        );

        Ok(Self { http, config })
    }

    async fn exchange(&self, request: &TrackRequest) -> RelayResult<TrackResponse> {
        let mut builder = self.http.post(self.config.convert_url()).json(request);
        if let Some(token) = self.config.hook_token() {
            builder = builder.header(HOOK_TOKEN_HEADER, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::from_reqwest(&e, self.config.timeout()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read tracker error body: {}", e);
                    String::new()
                }
            };
            error!(
                status = status.as_u16(),
                body = %body,
                "Tracker /convert returned an error status"
            );
            return Err(RelayError::status(status.as_u16(), body));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::timeout(self.config.timeout())
            } else {
                RelayError::invalid_body(format!("Failed to read response body: {}", e))
            }
        })?;

        TrackResponse::parse(&body)
    }
}

#[async_trait]
impl TrackerApi for TrackerClient {
    async fn convert(&self, request: &TrackRequest) -> RelayResult<TrackResponse> {
        debug!(url = %request.url, prefer = %request.prefer, "POST {}", self.config.convert_url());

        // Bounds the whole exchange, body read included.
        match timeout(self.config.timeout(), self.exchange(request)).await {
            Ok(result) => result,
            Err(_) => Err(RelayError::timeout(self.config.timeout())),
        }
    }
}
