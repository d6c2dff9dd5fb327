//! TUI widgets — ratatui components for the chat layout
//!
//! Layout:
//! ┌── Header (3) ─────────────────────────────────────┐
//! ├── Conversation (flex) ────────────────────────────┤
//! ├── Error banner (3, only when an error is shown) ──┤
//! ├── Input (3..=MAX_INPUT_HEIGHT) ───────────────────┤
//! └── StatusBar (1) ──────────────────────────────────┘

pub mod conversation;
pub mod error_banner;
pub mod header;
pub mod input;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Input text lines shown before the input box starts scrolling
pub const MAX_INPUT_LINES: u16 = 6;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub error: Option<Rect>,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// `input_lines` is the number of lines in the draft; the input box
    /// grows with it up to [`MAX_INPUT_LINES`].
    pub fn compute(area: Rect, input_lines: u16, show_error: bool) -> Self {
        let input_height = input_lines.clamp(1, MAX_INPUT_LINES) + 2;
        let error_height = if show_error { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(error_height),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            conversation: chunks[1],
            error: show_error.then_some(chunks[2]),
            input: chunks[3],
            status_bar: chunks[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_error() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), 1, false);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert!(layout.error.is_none());
        assert_eq!(layout.conversation.height, 24 - 3 - 3 - 1);
    }

    #[test]
    fn test_input_grows_and_caps() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 40), 3, true);
        assert_eq!(layout.input.height, 5);
        assert_eq!(layout.error.map(|r| r.height), Some(3));

        let layout = MainLayout::compute(Rect::new(0, 0, 80, 40), 50, false);
        assert_eq!(layout.input.height, MAX_INPUT_LINES + 2);
    }
}
