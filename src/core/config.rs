//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moodring/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The Gemini env vars (`GEMINI_API_KEY`, `GEMINI_MODEL`, `REQUIRE_GEMINI`,
//! `GEMINI_BASE_URL`) match the ones the sentiment web service reads, so a
//! single `.env` can drive both.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MoodringConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
    /// Shell command that receives the share summary on stdin.
    pub share_command: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub require: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "text-bison@001";

// ============================================================================
// Provider Selection
// ============================================================================

/// Which analysis engine the session runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// The sentiment web service (`/api/sentiment` + `/api/status`).
    #[default]
    Backend,
    /// Gemini text API directly, with lexicon fallback.
    Gemini,
    /// Offline lexicon scoring only.
    Local,
}

impl ProviderKind {
    /// Parse a config-file or env spelling. Unknown names fall back to the
    /// backend with a warning.
    fn from_name(name: &str) -> Self {
        match name {
            "backend" => Self::Backend,
            "gemini" => Self::Gemini,
            "local" => Self::Local,
            other => {
                warn!("Unknown provider {other:?}, using backend");
                Self::Backend
            }
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: ProviderKind,
    pub backend_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub require_gemini: bool,
    pub share_command: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.moodring/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moodring").join("config.toml"))
}

/// Load config from `~/.moodring/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MoodringConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MoodringConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MoodringConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MoodringConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MoodringConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# moodring Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "backend"       # "backend", "gemini", or "local"
# share_command = "termux-share"     # receives the share summary on stdin

# [backend]
# base_url = "http://localhost:5000"

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com"
# model = "text-bison@001"
# require = false                    # true: never fall back to the lexicon analyzer
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_provider` and `cli_backend_url` come from CLI flags (None = not given).
pub fn resolve(
    config: &MoodringConfig,
    cli_provider: Option<ProviderKind>,
    cli_backend_url: Option<&str>,
) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli_provider
        .or_else(|| {
            std::env::var("MOODRING_PROVIDER")
                .ok()
                .map(|s| ProviderKind::from_name(&s))
        })
        .or_else(|| {
            config
                .general
                .default_provider
                .as_deref()
                .map(ProviderKind::from_name)
        })
        .unwrap_or_default();

    // Backend base URL: CLI → env → config → default
    let backend_base_url = cli_backend_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MOODRING_BACKEND_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string());

    // Gemini API key: env → config
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| config.gemini.api_key.clone());

    let gemini_base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    let gemini_model = std::env::var("GEMINI_MODEL")
        .ok()
        .or_else(|| config.gemini.model.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

    // REQUIRE_GEMINI follows the web service's convention: "1" means on
    let require_gemini = match std::env::var("REQUIRE_GEMINI") {
        Ok(v) => v == "1",
        Err(_) => config.gemini.require.unwrap_or(false),
    };

    ResolvedConfig {
        provider,
        backend_base_url,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
        require_gemini,
        share_command: config.general.share_command.clone(),
    }
}
