//! # Analysis Layer
//!
//! The seam between the app and whatever produces sentiment verdicts.
//! Providers implement [`SentimentProvider`]: a one-shot capability probe
//! plus text analysis that settles with a raw JSON payload. Interpretation
//! of payloads lives in `core::outcome`, not here.

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ProviderError, SentimentProvider};
pub use providers::{BackendProvider, GeminiProvider, LexiconProvider};
pub use types::{AnalysisRequest, StatusInfo};
