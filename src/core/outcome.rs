//! # Payload Interpretation
//!
//! Turns a raw analysis payload into the fields the result card displays.
//! The payload stays loose JSON end to end: every field is optional, the
//! HTTP status never decides the shape, and an `error` field wins over
//! whatever else the payload carries. Interpretation happens exactly once,
//! here, so the rendering layer never touches serde_json.

use serde_json::Value;

/// Sentiment classes the card styles differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

/// Display-ready interpretation of one analysis payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub mood: Mood,
    /// Card headline: "Positive", "Error", or the raw tag for unrecognized ones.
    pub label: String,
    /// Rounded percentage ("92%"), or "—" when the score is absent or non-numeric.
    pub score_text: String,
    pub explanation: String,
    /// Pretty-printed payload for the raw response panel.
    pub raw_json: String,
    /// Error payloads disable copy/share and never celebrate.
    pub is_error: bool,
}

impl Outcome {
    /// Interpret an analysis payload.
    ///
    /// An `error` field (of any non-null type) takes precedence over every
    /// other field. Otherwise the sentiment tag is lower-cased and folded
    /// into a [`Mood`]; unrecognized tags keep their lower-cased text as the
    /// card label. The score is only shown when it is a JSON number, and it
    /// is deliberately not clamped: a backend claiming 1.5 shows as "150%".
    pub fn from_payload(payload: &Value) -> Self {
        let raw_json =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

        if let Some(err) = payload.get("error").filter(|v| !v.is_null()) {
            let explanation = match err {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Self {
                mood: Mood::Unknown,
                label: "Error".to_string(),
                score_text: "—".to_string(),
                explanation,
                raw_json,
                is_error: true,
            };
        }

        let tag = match payload.get("sentiment") {
            Some(Value::String(s)) => s.to_lowercase(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string().to_lowercase(),
        };

        let (mood, label) = match tag.as_str() {
            "positive" => (Mood::Positive, "Positive".to_string()),
            "neutral" => (Mood::Neutral, "Neutral".to_string()),
            "negative" => (Mood::Negative, "Negative".to_string()),
            "" => (Mood::Unknown, "Unknown".to_string()),
            _ => (Mood::Unknown, tag.clone()),
        };

        let score_text = match payload.get("score").and_then(Value::as_f64) {
            Some(score) => format!("{}%", (score * 100.0).round() as i64),
            None => "—".to_string(),
        };

        let explanation = match payload.get("explanation") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            None | Some(Value::Null) | Some(Value::String(_)) => payload.to_string(),
            Some(other) => other.to_string(),
        };

        Self {
            mood,
            label,
            score_text,
            explanation,
            raw_json,
            is_error: false,
        }
    }

    /// Copy/share text: headline, score, and explanation.
    pub fn summary(&self) -> String {
        format!("{} — {}\n{}", self.label, self.score_text, self.explanation)
    }

    /// Only exact positive verdicts get the confetti burst.
    pub fn celebrates(&self) -> bool {
        !self.is_error && self.mood == Mood::Positive
    }
}
