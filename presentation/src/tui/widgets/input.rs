//! Input widget — multiline draft editor
//!
//! Text is split on `\n` and rendered as multiple lines. The box scrolls to
//! keep the cursor row visible once the draft outgrows it.

use crate::tui::state::ChatState;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a ChatState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a ChatState) -> Self {
        Self { state }
    }

    /// First visible input row for an inner area of `inner_height` rows
    fn scroll_row(&self, inner_height: u16) -> u16 {
        let (row, _) = self.state.cursor_row_col();
        (row as u16).saturating_sub(inner_height.saturating_sub(1))
    }

    /// Terminal cursor position for the draft cursor inside `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner_height = area.height.saturating_sub(2);
        let (row, col) = self.state.cursor_row_col();
        let row = (row as u16).saturating_sub(self.scroll_row(inner_height));
        let max_col = area.width.saturating_sub(3);
        Position::new(
            area.x + 1 + (col as u16).min(max_col),
            area.y + 1 + row.min(inner_height.saturating_sub(1)),
        )
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, color) = if self.state.is_in_flight() {
            (
                format!(" {} Thinking... ", self.state.spinner()),
                Color::Yellow,
            )
        } else {
            (" Your Question ".to_string(), Color::Green)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        let lines: Vec<Line> = if self.state.input.is_empty() {
            vec![Line::styled(
                "Type your question here...",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.state
                .input
                .split('\n')
                .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::White)))
                .collect()
        };

        let inner_height = area.height.saturating_sub(2);
        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll_row(inner_height), 0))
            .render(area, buf);
    }
}
