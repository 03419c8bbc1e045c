//! # ResultCard Component
//!
//! The verdict card: mood face on the left, label + score headline and the
//! explanation text on the right. Before the first analysis it shows a
//! hint instead.
//!
//! Created fresh each frame with a reference to the latest outcome, like
//! the other transient components. Height is computed up front so the
//! parent layout can size the card to its wrapped explanation.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::outcome::Outcome;
use crate::tui::component::Component;
use crate::tui::components::icon::{ICON_HEIGHT, ICON_WIDTH, MoodIcon, mood_color};

const EMPTY_HINT: &str = "Type something and press Enter to analyze its sentiment.";

/// Gap between the face and the text column.
const ICON_GAP: u16 = 2;

pub struct ResultCard<'a> {
    pub outcome: Option<&'a Outcome>,
}

impl ResultCard<'_> {
    /// Height the card needs at this width, borders included.
    pub fn calculate_height(outcome: Option<&Outcome>, content_width: u16) -> u16 {
        let inner_width = content_width.saturating_sub(2);
        match outcome {
            None => {
                let hint = Paragraph::new(EMPTY_HINT).wrap(Wrap { trim: true });
                hint.line_count(inner_width) as u16 + 2
            }
            Some(outcome) => {
                let text_width = inner_width.saturating_sub(ICON_WIDTH + ICON_GAP);
                let text = Paragraph::new(text_lines(outcome)).wrap(Wrap { trim: true });
                let text_height = text.line_count(text_width) as u16;
                text_height.max(ICON_HEIGHT) + 2
            }
        }
    }
}

/// Headline plus explanation, styled per mood.
fn text_lines(outcome: &Outcome) -> Vec<Line<'_>> {
    let accent = Style::default()
        .fg(mood_color(outcome.mood))
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled(outcome.label.as_str(), accent),
            Span::raw("  "),
            Span::styled(
                outcome.score_text.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(outcome.explanation.as_str()),
    ]
}

impl Component for ResultCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Result");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(outcome) = self.outcome else {
            let hint = Paragraph::new(EMPTY_HINT)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
            return;
        };

        let [icon_area, text_area] =
            Layout::horizontal([Constraint::Length(ICON_WIDTH + ICON_GAP), Constraint::Min(0)])
                .areas(inner);

        MoodIcon { mood: outcome.mood }.render(frame, icon_area);

        let text = Paragraph::new(text_lines(outcome)).wrap(Wrap { trim: true });
        frame.render_widget(text, text_area);
    }
}
