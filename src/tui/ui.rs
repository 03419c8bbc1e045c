use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActionBar, Header, JsonPanel, NoticeModal, ResultCard};

/// Draw the whole screen.
///
/// Top to bottom: status header, input box, result card, action row, raw
/// response panel. The input box and result card size themselves to their
/// content; the raw response panel absorbs whatever is left. Confetti and
/// the notice modal paint over the top at the end.
pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
    now: Instant,
) {
    use Constraint::{Length, Min};

    let input_height = tui.input.calculate_height(frame.area().width);
    let card_height = ResultCard::calculate_height(app.latest.as_ref(), frame.area().width);

    let layout = Layout::vertical([
        Length(1),
        Length(input_height),
        Length(card_height),
        Length(1),
        Min(0),
    ]);
    let [header_area, input_area, card_area, actions_area, json_area] =
        layout.areas(frame.area());

    Header::new(app.status.clone()).render(frame, header_area);
    tui.input.render(frame, input_area);
    ResultCard {
        outcome: app.latest.as_ref(),
    }
    .render(frame, card_area);
    ActionBar {
        is_analyzing: app.is_analyzing,
        actions_enabled: app.actions_enabled(),
        spinner_frame,
    }
    .render(frame, actions_area);
    JsonPanel {
        state: &mut tui.json_scroll,
        raw_json: app.latest.as_ref().map(|o| o.raw_json.as_str()),
    }
    .render(frame, json_area);

    // Cache the card area so a burst triggered between draws spans the
    // card's current width.
    tui.card_area = card_area;
    tui.confetti.render(frame.buffer_mut(), card_area, now);

    if let Some(notice) = &app.notice {
        NoticeModal { message: notice }.render(frame, frame.area());
    }
}
