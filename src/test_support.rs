//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::analysis::{ProviderError, SentimentProvider, StatusInfo};

/// A canned provider for tests that don't need real requests.
pub struct StubProvider;

#[async_trait]
impl SentimentProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn status(&self) -> Result<StatusInfo, ProviderError> {
        Ok(StatusInfo {
            gemini_enabled: false,
            mode: Some("fallback".to_string()),
            model: None,
            require_gemini: false,
        })
    }

    async fn analyze(&self, _text: &str) -> Result<Value, ProviderError> {
        Ok(json!({"sentiment": "neutral", "score": 0.5, "explanation": "stub"}))
    }
}

/// Creates a test App with a StubProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubProvider))
}
