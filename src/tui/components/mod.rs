//! Building blocks for the main screen, composed by `tui::ui`.

pub mod action_bar;
pub mod confetti;
pub mod header;
pub mod icon;
pub mod input_box;
pub mod json_panel;
pub mod notice;
pub mod result_card;

pub use action_bar::ActionBar;
pub use confetti::ConfettiField;
pub use header::Header;
pub use icon::MoodIcon;
pub use input_box::{InputBox, InputEvent};
pub use json_panel::{JsonPanel, JsonPanelState};
pub use notice::NoticeModal;
pub use result_card::ResultCard;
