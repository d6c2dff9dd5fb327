//! Conversation widget — the transcript, newest at the bottom
//!
//! User messages are right-aligned, assistant messages left-aligned.

use crate::tui::state::ChatState;
use askai_domain::Origin;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ConversationWidget<'a> {
    state: &'a ChatState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a ChatState) -> Self {
        Self { state }
    }

    fn format_messages(&self) -> Text<'a> {
        let mut lines: Vec<Line> = Vec::new();

        for msg in &self.state.messages {
            let (alignment, color) = match msg.origin() {
                Origin::User => (Alignment::Right, Color::Cyan),
                Origin::Assistant => (Alignment::Left, Color::Green),
            };

            lines.push(
                Line::from(Span::styled(
                    format!("{} · {}", msg.origin().label(), msg.created_at().format("%H:%M")),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .alignment(alignment),
            );

            for content_line in msg.text().lines() {
                lines.push(Line::from(content_line.to_string()).alignment(alignment));
            }
            lines.push(Line::from(""));
        }

        if self.state.is_in_flight() {
            lines.push(Line::from(Span::styled(
                format!("{} Thinking...", self.state.spinner()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        Text::from(lines)
    }
}

impl Widget for ConversationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Count wrapped lines with the same algorithm used for rendering.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width);
        let scroll = scroll_from_top(total_lines, visible_height, self.state.scroll_offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}

/// Rows to skip from the top so the view ends `offset` lines above the
/// bottom. ratatui scrolls by `u16`, so very long transcripts saturate.
fn scroll_from_top(total_lines: usize, visible_height: u16, offset: usize) -> u16 {
    let max_scroll = total_lines.saturating_sub(visible_height as usize);
    let scroll = max_scroll - offset.min(max_scroll);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use askai_application::UiEvent;
    use askai_domain::{Message, Question, RequestLifecycle};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_both_origins() {
        let mut state = ChatState::new("m");
        state.apply(&UiEvent::MessageAppended(Message::user(
            Question::try_new("What is 2+2?").unwrap(),
        )));
        state.apply(&UiEvent::MessageAppended(Message::assistant("4")));

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        ConversationWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("What is 2+2?"));
        assert!(text.contains("You"));
        assert!(text.contains("AI"));
    }

    #[test]
    fn test_scroll_follows_bottom() {
        assert_eq!(scroll_from_top(5, 10, 0), 0);
        assert_eq!(scroll_from_top(30, 10, 0), 20);
        assert_eq!(scroll_from_top(30, 10, 5), 15);
        assert_eq!(scroll_from_top(30, 10, 100), 0);
    }

    #[test]
    fn test_scroll_saturates_for_huge_transcripts() {
        assert_eq!(scroll_from_top(70_000, 10, 0), u16::MAX);
        assert_eq!(scroll_from_top(70_000, 10, 69_990), 0);
        // Just under the limit still scrolls exactly
        assert_eq!(scroll_from_top(65_545, 10, 0), 65_535);
    }

    #[test]
    fn test_thinking_indicator_while_in_flight() {
        let mut state = ChatState::new("m");
        state.apply(&UiEvent::LifecycleChanged(RequestLifecycle::InFlight));

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        ConversationWidget::new(&state).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Thinking..."));
    }
}
