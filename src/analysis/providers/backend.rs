//! Client for the sentiment web service.
//!
//! Two endpoints: `GET /api/status` for the startup capability probe and
//! `POST /api/sentiment` for analysis. The service reports trouble in the
//! body rather than the status line: a 502 carrying `{"error": ...}` is a
//! payload like any other, so the HTTP status is logged and otherwise
//! ignored. Analysis requests carry no client-side timeout.

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use crate::analysis::{AnalysisRequest, ProviderError, SentimentProvider, StatusInfo};

pub struct BackendProvider {
    base_url: String,
    client: reqwest::Client,
}

impl BackendProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SentimentProvider for BackendProvider {
    fn name(&self) -> &str {
        "backend"
    }

    async fn status(&self) -> Result<StatusInfo, ProviderError> {
        let response = self
            .client
            .get(format!("{}/api/status", self.base_url))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Status response: HTTP {}", response.status());

        response
            .json::<StatusInfo>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn analyze(&self, text: &str) -> Result<Value, ProviderError> {
        info!(
            "Requesting analysis from {} ({} bytes of text)",
            self.base_url,
            text.len()
        );

        let response = self
            .client
            .post(format!("{}/api/sentiment", self.base_url))
            .json(&AnalysisRequest { text })
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        debug!("Analysis response: HTTP {status}");
        Ok(payload)
    }
}
