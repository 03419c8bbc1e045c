//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (spinner while a request is in flight, confetti after a
//!   positive verdict): draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod platform;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::analysis::{BackendProvider, GeminiProvider, LexiconProvider, SentimentProvider};
use crate::core::action::{Action, Effect, update};
use crate::core::config::{ProviderKind, ResolvedConfig};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConfettiField, InputBox, InputEvent, JsonPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input: InputBox,
    pub json_scroll: JsonPanelState,
    // Celebration overlay
    pub confetti: ConfettiField,
    /// Result card area from the last draw; bursts span its width.
    pub card_area: Rect,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input: InputBox::new(),
            json_scroll: JsonPanelState::new(),
            confetti: ConfettiField::new(),
            card_area: Rect::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build a provider from a resolved config's provider kind and credentials.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn SentimentProvider> {
    match config.provider {
        ProviderKind::Backend => Arc::new(BackendProvider::new(config.backend_base_url.clone())),
        ProviderKind::Local => Arc::new(LexiconProvider::new()),
        ProviderKind::Gemini => {
            let api_key = config.gemini_api_key.clone().expect(
                "Gemini API key must be set (config file or GEMINI_API_KEY env var) when using --provider gemini",
            );
            Arc::new(GeminiProvider::new(
                api_key,
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                config.require_gemini,
            ))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::new(provider);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // One-shot capability probe; the header shows its result when it lands.
    spawn_status_probe(app.provider.clone(), tx.clone());

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = std::time::Instant::now();
        tui.confetti.sweep(now);

        let animating = app.is_analyzing || tui.confetti.is_live();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits, even under a notice
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // A raised notice swallows input until dismissed. Enter and
            // Space dismiss directly; Esc goes through the reducer, which
            // treats it as dismiss-first.
            if app.notice.is_some() {
                match event {
                    TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                        update(&mut app, Action::DismissNotice);
                    }
                    TuiEvent::Escape => {
                        let effect = update(&mut app, Action::Escape);
                        if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                            should_quit = true;
                        }
                    }
                    _ => {}
                }
                continue;
            }

            // Scroll events always go to the raw response panel
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.json_scroll.handle_event(&event);
                continue;
            }

            match event {
                TuiEvent::Escape => {
                    let effect = update(&mut app, Action::Escape);
                    if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::CopyResult => {
                    let effect = update(&mut app, Action::CopyResult);
                    if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::ShareResult => {
                    let effect = update(&mut app, Action::ShareResult);
                    if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                        should_quit = true;
                    }
                }
                // InputBox handles everything else
                _ => {
                    if let Some(input_event) = tui.input.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                let effect = update(&mut app, Action::Submit(text));
                                if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                                    should_quit = true;
                                }
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (status probe, analysis results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let arrived = matches!(action, Action::AnalysisArrived(_));
            let effect = update(&mut app, action);
            if arrived {
                // Fresh payload: read it from the top.
                tui.json_scroll.reset();
            }
            if run_effect(effect, &mut app, &mut tui, &config, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Execute one side effect. Returns true when the loop should exit.
fn run_effect(
    effect: Effect,
    app: &mut App,
    tui: &mut TuiState,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnAnalysis(text) => {
            spawn_analysis(app.provider.clone(), text, tx.clone());
            false
        }
        Effect::Confetti => {
            tui.confetti.burst(tui.card_area.width);
            false
        }
        Effect::CopySummary(summary) => {
            let notice = match platform::copy_text(&summary) {
                Ok(()) => "Result copied to clipboard".to_string(),
                Err(e) => {
                    warn!("Clipboard copy failed: {e}");
                    "Copy failed".to_string()
                }
            };
            update(app, Action::Notify(notice)) == Effect::Quit
        }
        Effect::ShareSummary(summary) => {
            // A configured share command reports nothing on success: it may
            // open its own picker, and cancelling there is not a failure.
            let notice = match &config.share_command {
                Some(command) => match platform::share_text(command, &summary) {
                    Ok(()) => None,
                    Err(e) => {
                        warn!("Share command failed: {e}");
                        Some(format!("Share failed: {e}"))
                    }
                },
                None => match platform::copy_text(&summary) {
                    Ok(()) => Some("No sharing available; copied to clipboard instead".to_string()),
                    Err(e) => {
                        warn!("Share fallback copy failed: {e}");
                        Some("Share/copy failed".to_string())
                    }
                },
            };
            match notice {
                Some(message) => update(app, Action::Notify(message)) == Effect::Quit,
                None => false,
            }
        }
    }
}

fn spawn_analysis(provider: Arc<dyn SentimentProvider>, text: String, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning analysis request via '{}' ({} chars)",
        provider.name(),
        text.len()
    );
    tokio::spawn(async move {
        let action = match provider.analyze(&text).await {
            Ok(payload) => Action::AnalysisArrived(payload),
            Err(e) => Action::AnalysisFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send analysis result: receiver dropped");
        }
    });
}

fn spawn_status_probe(provider: Arc<dyn SentimentProvider>, tx: mpsc::Sender<Action>) {
    info!("Probing provider status");
    tokio::spawn(async move {
        match provider.status().await {
            Ok(info) => {
                if tx.send(Action::StatusLoaded(info)).is_err() {
                    warn!("Failed to send status info: receiver dropped");
                }
            }
            // The header keeps its pre-probe look when the probe fails.
            Err(e) => warn!("Could not fetch status: {e}"),
        }
    });
}
