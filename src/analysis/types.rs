//! Wire types shared by the analysis providers.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/sentiment`.
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// Capability report from `GET /api/status`.
///
/// Every field is optional on the wire. Absent or null fields fall back to
/// "disabled" defaults, so a partial body still produces a usable header.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StatusInfo {
    #[serde(default)]
    pub gemini_enabled: bool,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub require_gemini: bool,
}

impl StatusInfo {
    /// Header text describing the configured engine.
    pub fn headline(&self) -> String {
        if self.gemini_enabled {
            let mode = self.mode.as_deref().unwrap_or("unknown");
            let mut label = match self.model.as_deref().filter(|m| !m.is_empty()) {
                Some(model) => format!("Gemini configured ({mode} — {model})"),
                None => format!("Gemini configured ({mode})"),
            };
            if self.require_gemini {
                label.push_str(" — required");
            }
            label
        } else if self.require_gemini {
            "Gemini required (not configured)".to_string()
        } else {
            "Use Gemini (not configured)".to_string()
        }
    }
}
