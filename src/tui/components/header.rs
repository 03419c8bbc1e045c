//! # Header Component
//!
//! Single-line top bar: app name plus the Gemini status readout.
//!
//! The checkbox and headline mirror whatever the status probe reported.
//! Until the probe answers (or if it fails), the header shows an
//! unchecked box with the default label.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::analysis::StatusInfo;
use crate::tui::component::Component;

/// Top bar component.
///
/// # Props
///
/// - `status`: The most recent probe result, if any arrived yet.
pub struct Header {
    pub status: Option<StatusInfo>,
}

impl Header {
    pub fn new(status: Option<StatusInfo>) -> Self {
        Self { status }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (enabled, headline) = match &self.status {
            Some(status) => (status.gemini_enabled, status.headline()),
            None => (false, "Use Gemini".to_string()),
        };

        let checkbox = if enabled { "[x]" } else { "[ ]" };
        let checkbox_style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled(
                "moodring",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(headline, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(line, area);
    }
}
