//! # Actions
//!
//! Everything that can happen in moodring becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The provider responds? That's `Action::AnalysisArrived(payload)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any side effect the event
//! loop should run. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.
//! And debuggable: log every action, replay the exact session.

use log::{debug, warn};
use serde_json::Value;

use crate::analysis::StatusInfo;
use crate::core::outcome::Outcome;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Input submitted for analysis. The reducer trims and validates.
    Submit(String),
    /// Analysis settled with a payload. Error-shaped bodies arrive here too;
    /// interpretation decides what they mean.
    AnalysisArrived(Value),
    /// Analysis failed before producing any payload (network or parse).
    AnalysisFailed(String),
    /// The startup status probe succeeded.
    StatusLoaded(StatusInfo),
    CopyResult,
    ShareResult,
    /// Raise a blocking notice (capability results reported by the event loop).
    Notify(String),
    DismissNotice,
    /// Esc: dismisses the notice if one is up, otherwise quits.
    Escape,
    Quit,
}

/// Side effects the event loop runs after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the provider against this (already trimmed) text.
    SpawnAnalysis(String),
    /// Fire the celebration overlay.
    Confetti,
    /// Put this summary on the clipboard.
    CopySummary(String),
    /// Hand this summary to the share pipeline.
    ShareSummary(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if app.is_analyzing {
                debug!("Submit ignored: analysis already in flight");
                return Effect::None;
            }
            let trimmed = text.trim();
            if trimmed.is_empty() {
                app.notice = Some("Please enter some text to analyze.".to_string());
                return Effect::None;
            }
            app.is_analyzing = true;
            Effect::SpawnAnalysis(trimmed.to_string())
        }
        Action::AnalysisArrived(payload) => {
            app.is_analyzing = false;
            let outcome = Outcome::from_payload(&payload);
            let celebrate = outcome.celebrates();
            debug!("Analysis arrived: label={:?}, celebrate={}", outcome.label, celebrate);
            app.latest = Some(outcome);
            if celebrate { Effect::Confetti } else { Effect::None }
        }
        Action::AnalysisFailed(detail) => {
            warn!("Analysis failed: {detail}");
            app.is_analyzing = false;
            app.notice = Some(format!("Request failed: {detail}"));
            Effect::None
        }
        Action::StatusLoaded(info) => {
            debug!("Status loaded: {info:?}");
            app.status = Some(info);
            Effect::None
        }
        Action::CopyResult => match app.summary() {
            Some(summary) => Effect::CopySummary(summary),
            None => Effect::None,
        },
        Action::ShareResult => match app.summary() {
            Some(summary) => Effect::ShareSummary(summary),
            None => Effect::None,
        },
        Action::Notify(message) => {
            app.notice = Some(message);
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Escape => {
            if app.notice.take().is_some() {
                Effect::None
            } else {
                Effect::Quit
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use serde_json::json;

    // -- submission --------------------------------------------------------

    #[test]
    fn test_submit_spawns_analysis_with_trimmed_text() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  I love this  ".to_string()));
        assert_eq!(effect, Effect::SpawnAnalysis("I love this".to_string()));
        assert!(app.is_analyzing);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_submit_whitespace_raises_notice() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("   \n\t ".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_analyzing);
        assert_eq!(
            app.notice.as_deref(),
            Some("Please enter some text to analyze.")
        );
    }

    #[test]
    fn test_submit_while_analyzing_is_ignored() {
        let mut app = test_app();
        app.is_analyzing = true;
        let effect = update(&mut app, Action::Submit("more text".to_string()));
        assert_eq!(effect, Effect::None);
    }

    // -- settlement --------------------------------------------------------

    #[test]
    fn test_positive_arrival_stores_outcome_and_fires_confetti() {
        let mut app = test_app();
        app.is_analyzing = true;
        let payload = json!({"sentiment": "positive", "score": 0.9, "explanation": "yay"});
        let effect = update(&mut app, Action::AnalysisArrived(payload));
        assert_eq!(effect, Effect::Confetti);
        assert!(!app.is_analyzing);
        assert_eq!(app.latest.as_ref().map(|o| o.label.as_str()), Some("Positive"));
    }

    #[test]
    fn test_non_positive_arrival_has_no_confetti() {
        for payload in [
            json!({"sentiment": "negative", "score": 0.1}),
            json!({"sentiment": "neutral"}),
            json!({"sentiment": "Positive "}),
            json!({"error": "nope"}),
        ] {
            let mut app = test_app();
            app.is_analyzing = true;
            let effect = update(&mut app, Action::AnalysisArrived(payload.clone()));
            assert_eq!(effect, Effect::None, "payload {payload}");
            assert!(!app.is_analyzing);
        }
    }

    #[test]
    fn test_failure_raises_request_failed_notice() {
        let mut app = test_app();
        app.is_analyzing = true;
        let effect = update(
            &mut app,
            Action::AnalysisFailed("connection refused".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.is_analyzing);
        assert_eq!(
            app.notice.as_deref(),
            Some("Request failed: connection refused")
        );
        assert!(app.latest.is_none(), "failed requests leave the card alone");
    }

    // -- copy and share gating ---------------------------------------------

    #[test]
    fn test_copy_with_result_emits_summary() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AnalysisArrived(json!({"sentiment": "neutral", "score": 0.5, "explanation": "meh"})),
        );
        let effect = update(&mut app, Action::CopyResult);
        assert_eq!(effect, Effect::CopySummary("Neutral — 50%\nmeh".to_string()));
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::CopyResult), Effect::None);
    }

    #[test]
    fn test_copy_and_share_blocked_after_error_payload() {
        let mut app = test_app();
        update(&mut app, Action::AnalysisArrived(json!({"error": "boom"})));
        assert_eq!(update(&mut app, Action::CopyResult), Effect::None);
        assert_eq!(update(&mut app, Action::ShareResult), Effect::None);
    }

    #[test]
    fn test_share_with_result_emits_summary() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AnalysisArrived(json!({"sentiment": "positive", "score": 1, "explanation": "great"})),
        );
        let effect = update(&mut app, Action::ShareResult);
        assert_eq!(effect, Effect::ShareSummary("Positive — 100%\ngreat".to_string()));
    }

    // -- notices and quitting ----------------------------------------------

    #[test]
    fn test_notify_and_dismiss() {
        let mut app = test_app();
        update(&mut app, Action::Notify("Result copied to clipboard".to_string()));
        assert_eq!(app.notice.as_deref(), Some("Result copied to clipboard"));
        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_escape_dismisses_notice_before_quitting() {
        let mut app = test_app();
        app.notice = Some("hold on".to_string());
        assert_eq!(update(&mut app, Action::Escape), Effect::None);
        assert!(app.notice.is_none());
        assert_eq!(update(&mut app, Action::Escape), Effect::Quit);
    }

    #[test]
    fn test_quit_always_quits() {
        let mut app = test_app();
        app.notice = Some("hold on".to_string());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_status_loaded_is_stored() {
        let mut app = test_app();
        let info: StatusInfo = serde_json::from_value(json!({
            "gemini_enabled": true, "mode": "api_key", "model": "text-bison@001"
        }))
        .unwrap();
        update(&mut app, Action::StatusLoaded(info));
        assert!(app.status.as_ref().is_some_and(|s| s.gemini_enabled));
    }
}
