//! Error banner — the latest request failure, kept apart from the transcript

use crate::tui::state::ChatState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ErrorBannerWidget<'a> {
    state: &'a ChatState,
}

impl<'a> ErrorBannerWidget<'a> {
    pub fn new(state: &'a ChatState) -> Self {
        Self { state }
    }
}

impl Widget for ErrorBannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(error) = self.state.error.as_deref() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .style(Style::default().fg(Color::Red));

        Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }
}
