//! Status bar widget — request state + key hints

use crate::tui::state::ChatState;
use askai_domain::RequestLifecycle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a ChatState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a ChatState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (label, color) = match self.state.lifecycle {
            RequestLifecycle::Idle if self.state.error.is_some() => ("ERROR", Color::Red),
            RequestLifecycle::Idle => ("READY", Color::Green),
            RequestLifecycle::InFlight => ("THINKING", Color::Yellow),
            RequestLifecycle::Errored => ("ERROR", Color::Red),
        };

        let state_span = Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );

        let hints = if self.state.is_in_flight() {
            "waiting for answer  PgUp/PgDn:scroll  Ctrl+C:quit"
        } else {
            "Enter:send  Shift+Enter:newline  PgUp/PgDn:scroll  Ctrl+C:quit"
        };

        let line = Line::from(vec![
            state_span,
            Span::styled(format!(" {}", hints), bg_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
