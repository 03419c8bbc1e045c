//! Scrollable panel showing the raw provider response for the latest
//! analysis. Useful when the verdict looks off: the unparsed payload often
//! explains why (model prose, error fields, fallback explanations).

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Stylize;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll position, persistent across frames.
///
/// Anchored to the top: a new response resets the offset rather than
/// sticking to the bottom, since readers start from the payload's head.
pub struct JsonPanelState {
    pub scroll_state: ScrollViewState,
}

impl Default for JsonPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::new(),
        }
    }

    /// Jump back to the top (called when a fresh response lands).
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for JsonPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// Transient view over the state plus the current payload.
pub struct JsonPanel<'a> {
    pub state: &'a mut JsonPanelState,
    pub raw_json: Option<&'a str>,
}

impl Component for JsonPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Raw response ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(raw) = self.raw_json else {
            frame.render_widget(Paragraph::new("No response yet.".dark_gray()), inner);
            return;
        };

        // Reserve a column for the scrollbar so wrapped lines are not
        // clipped underneath it.
        let content_width = inner.width.saturating_sub(1);
        if content_width == 0 || inner.height == 0 {
            return;
        }

        let paragraph = Paragraph::new(raw).wrap(Wrap { trim: false });
        let total_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, total_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
