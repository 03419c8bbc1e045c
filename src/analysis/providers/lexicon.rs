//! Offline rule-based sentiment scorer.
//!
//! Word-list matching with a three-token negation window. Serves two roles:
//! a standalone provider (`--provider local`) and the fallback path the
//! Gemini provider uses when the API is unreachable.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::analysis::{ProviderError, SentimentProvider, StatusInfo};

const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "awesome", "fantastic", "love", "like", "happy", "excellent",
];
const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "terrible", "hate", "awful", "worst", "sad", "angry", "disappoint",
];
const NEGATION_WORDS: [&str; 8] = [
    "not", "no", "never", "n't", "none", "hardly", "rarely", "barely",
];
const NEGATION_WINDOW: usize = 3;

/// Split lower-cased text into word tokens (alphanumeric runs, underscores
/// included).
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in lowered.chars() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// True when a negation word sits within the window before `index`.
fn window_has_negation(tokens: &[String], index: usize) -> bool {
    let start = index.saturating_sub(NEGATION_WINDOW);
    tokens[start..index]
        .iter()
        .any(|t| NEGATION_WORDS.contains(&t.as_str()))
}

/// Score text against the word lists.
///
/// A lexicon hit preceded by a negation word (within three tokens) counts
/// for the opposite polarity. No hits or an exact tie scores neutral 0.5;
/// otherwise the polarity ratio maps onto [0, 1] and rounds to three
/// decimals.
pub fn score_text(text: &str) -> Value {
    let tokens = tokenize(text);
    let mut pos = 0u32;
    let mut neg = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        if POSITIVE_WORDS.contains(&token.as_str()) {
            if window_has_negation(&tokens, i) {
                neg += 1;
            } else {
                pos += 1;
            }
        }
        if NEGATIVE_WORDS.contains(&token.as_str()) {
            if window_has_negation(&tokens, i) {
                pos += 1;
            } else {
                neg += 1;
            }
        }
    }

    let total = pos + neg;
    let (sentiment, score) = if total == 0 {
        ("neutral", 0.5)
    } else {
        let ratio = (pos as f64 - neg as f64) / total as f64;
        let score = (0.5 + 0.5 * ratio).clamp(0.0, 1.0);
        let sentiment = if pos == neg {
            "neutral"
        } else if pos > neg {
            "positive"
        } else {
            "negative"
        };
        (sentiment, score)
    };

    json!({
        "sentiment": sentiment,
        "score": (score * 1000.0).round() / 1000.0,
        "explanation": format!(
            "Fallback analyzer: {pos} positive words, {neg} negative words (negation-aware)."
        ),
    })
}

/// Offline scorer exposed as a provider.
pub struct LexiconProvider;

impl LexiconProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentProvider for LexiconProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn status(&self) -> Result<StatusInfo, ProviderError> {
        Ok(StatusInfo {
            gemini_enabled: false,
            mode: Some("fallback".to_string()),
            model: None,
            require_gemini: false,
        })
    }

    async fn analyze(&self, text: &str) -> Result<Value, ProviderError> {
        Ok(score_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_words_score_positive() {
        let payload = score_text("I love this, it is great");
        assert_eq!(payload["sentiment"], "positive");
        assert_eq!(payload["score"].as_f64(), Some(1.0));
        assert_eq!(
            payload["explanation"],
            "Fallback analyzer: 2 positive words, 0 negative words (negation-aware)."
        );
    }

    #[test]
    fn negative_words_score_negative() {
        let payload = score_text("terrible, just awful");
        assert_eq!(payload["sentiment"], "negative");
        assert_eq!(payload["score"].as_f64(), Some(0.0));
    }

    #[test]
    fn negation_flips_polarity() {
        let payload = score_text("this is not good");
        assert_eq!(payload["sentiment"], "negative");
        assert_eq!(
            payload["explanation"],
            "Fallback analyzer: 0 positive words, 1 negative words (negation-aware)."
        );

        let payload = score_text("not bad at all");
        assert_eq!(payload["sentiment"], "positive");
    }

    #[test]
    fn negation_window_is_three_tokens() {
        // "not" sits three tokens before "good": still inside the window
        assert_eq!(score_text("not really very good")["sentiment"], "negative");
        // Four tokens back: outside the window
        assert_eq!(score_text("not a b c good")["sentiment"], "positive");
    }

    #[test]
    fn tie_scores_neutral() {
        let payload = score_text("good but bad");
        assert_eq!(payload["sentiment"], "neutral");
        assert_eq!(payload["score"].as_f64(), Some(0.5));
    }

    #[test]
    fn no_hits_score_neutral() {
        let payload = score_text("the sky is blue today");
        assert_eq!(payload["sentiment"], "neutral");
        assert_eq!(payload["score"].as_f64(), Some(0.5));
        assert_eq!(
            payload["explanation"],
            "Fallback analyzer: 0 positive words, 0 negative words (negation-aware)."
        );
    }

    #[test]
    fn score_rounds_to_three_decimals() {
        // pos=2, neg=1: 0.5 + 0.5 * (1/3) = 0.666...
        let payload = score_text("good and great but bad");
        assert_eq!(payload["sentiment"], "positive");
        assert_eq!(payload["score"].as_f64(), Some(0.667));
    }

    #[test]
    fn tokenization_ignores_case_and_punctuation() {
        assert_eq!(score_text("GREAT!!!")["sentiment"], "positive");
        assert_eq!(score_text("so... HAPPY?")["sentiment"], "positive");
    }

    #[test]
    fn provider_wraps_the_scorer() {
        let provider = LexiconProvider::new();
        let payload = tokio_test::block_on(provider.analyze("I love it")).unwrap();
        assert_eq!(payload["sentiment"], "positive");

        let status = tokio_test::block_on(provider.status()).unwrap();
        assert!(!status.gemini_enabled);
        assert_eq!(status.headline(), "Use Gemini (not configured)");
    }
}
