//! # ActionBar Component
//!
//! One-line row under the result card: the analyze trigger (or a spinner
//! while a request is in flight) and the copy/share key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stateless action row.
///
/// # Props
///
/// - `is_analyzing`: A request is in flight; the trigger turns into a spinner.
/// - `actions_enabled`: A non-error result exists, so copy/share work.
/// - `spinner_frame`: Animation frame counter from the event loop.
pub struct ActionBar {
    pub is_analyzing: bool,
    pub actions_enabled: bool,
    pub spinner_frame: usize,
}

impl Component for ActionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let trigger = if self.is_analyzing {
            Span::styled(
                format!(
                    "{} Analyzing...",
                    SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
                ),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(
                "[ Analyze Sentiment (Enter) ]",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let hint_style = if self.actions_enabled {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let line = Line::from(vec![
            trigger,
            Span::raw("   "),
            Span::styled("Ctrl+Y copy", hint_style),
            Span::raw("  "),
            Span::styled("Ctrl+E share", hint_style),
        ]);

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(bar: ActionBar) -> String {
        let backend = TestBackend::new(70, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = bar;
        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn idle_bar_shows_the_trigger_and_hints() {
        let text = render_to_text(ActionBar {
            is_analyzing: false,
            actions_enabled: false,
            spinner_frame: 0,
        });
        assert!(text.contains("[ Analyze Sentiment (Enter) ]"));
        assert!(text.contains("Ctrl+Y copy"));
        assert!(text.contains("Ctrl+E share"));
    }

    #[test]
    fn busy_bar_swaps_the_trigger_for_a_spinner() {
        let text = render_to_text(ActionBar {
            is_analyzing: true,
            actions_enabled: false,
            spinner_frame: 3,
        });
        assert!(text.contains("Analyzing..."));
        assert!(!text.contains("Analyze Sentiment (Enter)"));
    }
}
