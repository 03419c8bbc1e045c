//! Centered modal for transient notices: validation nudges, copy/share
//! confirmations, and failures. Rendered last so it sits above everything
//! else; the run loop swallows most input while one is up.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct NoticeModal<'a> {
    pub message: &'a str,
}

impl NoticeModal<'_> {
    fn modal_rect(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(6).clamp(20, 48);
        let inner_width = width.saturating_sub(2);
        let message_height = Paragraph::new(self.message)
            .wrap(Wrap { trim: false })
            .line_count(inner_width) as u16;
        let height = (message_height + 3).min(area.height);
        centered_rect(area, width, height)
    }
}

impl Component for NoticeModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let modal_area = self.modal_rect(area);

        frame.render_widget(Clear, modal_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ");
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let [message_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(self.message).wrap(Wrap { trim: false }),
            message_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from("Press Enter to dismiss".dark_gray()).centered()),
            footer_area,
        );
    }
}

/// Compute a centered rect of the given size within the outer rect.
fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(message: &str) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let mut modal = NoticeModal { message };
                modal.render(frame, frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_message_and_dismiss_hint() {
        let rendered = render_to_string("Result copied to clipboard");
        assert!(rendered.contains("Notice"));
        assert!(rendered.contains("Result copied to clipboard"));
        assert!(rendered.contains("Press Enter to dismiss"));
    }

    #[test]
    fn long_messages_wrap_instead_of_truncating() {
        let rendered =
            render_to_string("Please enter some text to analyze. The input box above is empty.");
        assert!(rendered.contains("Please enter some text"));
        assert!(rendered.contains("empty."));
    }
}
