use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::types::StatusInfo;

/// Errors that can occur during provider operations.
///
/// Deliberately small: an error-shaped JSON body is NOT an error here. It
/// settles as a payload and the interpretation layer decides what it means.
/// These variants cover the cases where no payload exists at all.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The response body was not JSON.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// An engine that reports its capabilities and analyzes text.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Capability probe, run once at startup.
    async fn status(&self) -> Result<StatusInfo, ProviderError>;

    /// Analyze one piece of (already trimmed) text, settling with the raw
    /// payload exactly as produced.
    async fn analyze(&self, text: &str) -> Result<Value, ProviderError>;
}
