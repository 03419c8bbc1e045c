//! Google Generative Language API provider.
//!
//! Calls the `:generate` endpoint with an API key, asks the model for a
//! JSON verdict, and digs that JSON out of whatever prose surrounds it.
//! When the call fails the provider either surfaces an error payload
//! (when Gemini is required) or degrades to the local lexicon scorer.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use crate::analysis::providers::lexicon;
use crate::analysis::{ProviderError, SentimentProvider, StatusInfo};

const GEMINI_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_OUTPUT_TOKENS: u32 = 512;

#[derive(Serialize)]
struct GenerateRequest {
    prompt: PromptText,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct PromptText {
    text: String,
}

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    require: bool,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: String, model: String, require: bool) -> Self {
        Self {
            api_key,
            base_url,
            model,
            require,
            client: reqwest::Client::new(),
        }
    }

    /// Instruction prompt with the user text embedded as a JSON string
    /// literal, so quotes and newlines survive intact.
    fn build_prompt(text: &str) -> String {
        format!(
            "You are a sentiment analysis assistant. Classify the sentiment of the text \
             into 'positive', 'neutral', or 'negative'. Return a JSON object with keys: \
             sentiment (string), score (float 0..1), explanation (short string).\
             \n\nText: {}",
            json!(text)
        )
    }

    /// One round trip to the generate endpoint, returning the model's raw
    /// text reply.
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta2/models/{}:generate?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateRequest {
            prompt: PromptText {
                text: Self::build_prompt(text),
            },
            temperature: 0.0,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };

        log::debug!("Calling Gemini model {} at {}", self.model, self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(GEMINI_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Network(format!("HTTP {status}: {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(extract_output_text(&body))
    }
}

#[async_trait]
impl SentimentProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn status(&self) -> Result<StatusInfo, ProviderError> {
        Ok(StatusInfo {
            gemini_enabled: true,
            mode: Some("api_key".to_string()),
            model: Some(self.model.clone()),
            require_gemini: self.require,
        })
    }

    async fn analyze(&self, text: &str) -> Result<Value, ProviderError> {
        log::info!("Analyzing sentiment with Gemini model {}", self.model);
        match self.generate(text).await {
            Ok(raw) => Ok(interpret_generation(raw)),
            Err(e) if self.require => {
                log::warn!("Gemini call failed and is required: {e}");
                Ok(json!({
                    "error": format!("Gemini (API key) unavailable: {e}"),
                }))
            }
            Err(e) => {
                log::warn!("Gemini call failed, falling back to local analyzer: {e}");
                let mut payload = lexicon::score_text(text);
                if let Some(fields) = payload.as_object_mut() {
                    let prior = fields
                        .get("explanation")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    fields.insert(
                        "explanation".to_string(),
                        Value::String(format!("Gemini (API key) unavailable: {e}. {prior}")),
                    );
                }
                Ok(payload)
            }
        }
    }
}

/// Pull the generated text out of a generate-endpoint response body.
///
/// Prefers `candidates[0].output`, then top-level `output` or `response`
/// fields; unknown shapes come back as compact JSON so the reply is still
/// visible downstream.
fn extract_output_text(body: &Value) -> String {
    if let Some(output) = body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("output"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    {
        return output.to_string();
    }
    for key in ["output", "response"] {
        if let Some(text) = body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()) {
            return text.to_string();
        }
    }
    body.to_string()
}

/// Widest brace-delimited slice of the reply, parsed as JSON.
fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Turn a raw model reply into the payload shape the UI expects. Replies
/// with no parseable JSON become an "unknown" verdict carrying the raw
/// text as explanation.
fn interpret_generation(raw: String) -> Value {
    match extract_json_object(&raw) {
        Some(payload) => payload,
        None => json!({
            "sentiment": "unknown",
            "score": 0.0,
            "explanation": raw,
        }),
    }
}
