//! # Application State
//!
//! Core business state for moodring. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursor, scroll offsets,
//! confetti particles) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn SentimentProvider>  // analysis engine
//! ├── latest: Option<Outcome>        // interpreted last result
//! ├── status: Option<StatusInfo>     // startup probe report
//! ├── is_analyzing: bool             // request in flight
//! └── notice: Option<String>         // blocking notice text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::analysis::{SentimentProvider, StatusInfo};
use crate::core::outcome::Outcome;
use std::sync::Arc;

pub struct App {
    pub provider: Arc<dyn SentimentProvider>,
    /// Interpretation of the most recent analysis (None until the first run).
    pub latest: Option<Outcome>,
    /// Capability report from the startup probe. Stays None when the probe
    /// fails, leaving the header at its defaults.
    pub status: Option<StatusInfo>,
    pub is_analyzing: bool,
    /// While set, the UI accepts nothing but a dismissal.
    pub notice: Option<String>,
}

impl App {
    pub fn new(provider: Arc<dyn SentimentProvider>) -> Self {
        Self {
            provider,
            latest: None,
            status: None,
            is_analyzing: false,
            notice: None,
        }
    }

    /// Copy/share text for the latest result. None when there is nothing
    /// usable: no result yet, or the latest payload was an error.
    pub fn summary(&self) -> Option<String> {
        self.latest
            .as_ref()
            .filter(|outcome| !outcome.is_error)
            .map(Outcome::summary)
    }

    /// Whether the copy/share actions are currently usable.
    pub fn actions_enabled(&self) -> bool {
        self.latest.as_ref().is_some_and(|outcome| !outcome.is_error)
    }
}
