//! # MoodIcon Component
//!
//! Three-line face matching the verdict, colored per mood.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::outcome::Mood;
use crate::tui::component::Component;

/// Columns the face occupies.
pub const ICON_WIDTH: u16 = 6;
/// Rows the face occupies.
pub const ICON_HEIGHT: u16 = 3;

/// Accent color for a mood, shared with the result card label.
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Positive => Color::Rgb(0x05, 0x96, 0x69),
        Mood::Neutral => Color::Rgb(0x6b, 0x72, 0x80),
        Mood::Negative => Color::Rgb(0xdc, 0x26, 0x26),
        Mood::Unknown => Color::Rgb(0x1e, 0x29, 0x3b),
    }
}

fn face_lines(mood: Mood) -> [&'static str; 3] {
    match mood {
        Mood::Positive => [" ____ ", "(^  ^)", " \\__/ "],
        Mood::Neutral => [" ____ ", "(o  o)", " ---- "],
        Mood::Negative => [" ____ ", "(o  o)", " /--\\ "],
        Mood::Unknown => [" ____ ", "(?  ?)", " ---- "],
    }
}

/// Stateless face renderer; the mood is its only prop.
pub struct MoodIcon {
    pub mood: Mood,
}

impl Component for MoodIcon {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(mood_color(self.mood))
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = face_lines(self.mood)
            .iter()
            .map(|text| Line::from(Span::styled(*text, style)))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(mood: Mood) -> String {
        let backend = TestBackend::new(ICON_WIDTH, ICON_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut icon = MoodIcon { mood };
        terminal
            .draw(|f| {
                icon.render(f, f.area());
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
    fn faces_are_distinct_per_mood() {
        assert!(render_to_text(Mood::Positive).contains("(^  ^)"));
        assert!(render_to_text(Mood::Neutral).contains("(o  o)"));
        assert!(render_to_text(Mood::Negative).contains("/--\\"));
        assert!(render_to_text(Mood::Unknown).contains("(?  ?)"));
    }

    #[test]
    fn face_lines_fit_the_declared_size() {
        for mood in [Mood::Positive, Mood::Neutral, Mood::Negative, Mood::Unknown] {
            let lines = face_lines(mood);
            assert_eq!(lines.len() as u16, ICON_HEIGHT);
            for line in lines {
                assert_eq!(line.chars().count() as u16, ICON_WIDTH);
            }
        }
    }
}
