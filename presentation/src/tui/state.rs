//! TUI view state
//!
//! A render-side mirror of the controller: updated from [`UiEvent`]s and
//! holding the editable input buffer with its cursor.

use askai_application::UiEvent;
use askai_domain::{Message, RequestLifecycle};

/// Spinner frames shown while a request is in flight
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Lines scrolled per PageUp/PageDown
const SCROLL_STEP: usize = 5;

/// Everything the widgets need to draw one frame
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    /// Draft being edited
    pub input: String,
    /// Cursor as a byte offset into `input`, always on a char boundary
    pub cursor: usize,
    pub lifecycle: RequestLifecycle,
    /// Latest request failure, shown in the error banner
    pub error: Option<String>,
    /// Lines scrolled up from the bottom of the conversation (0 = follow)
    pub scroll_offset: usize,
    pub spinner_frame: usize,
    pub model: String,
    pub should_quit: bool,
}

impl ChatState {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Apply a controller event
    pub fn apply(&mut self, event: &UiEvent) {
        match event {
            UiEvent::DraftChanged { draft } => {
                if *draft != self.input {
                    self.input = draft.clone();
                    self.cursor = self.input.len();
                }
            }
            UiEvent::MessageAppended(message) => {
                self.messages.push(message.clone());
                // Jump back to the newest message
                self.scroll_offset = 0;
            }
            UiEvent::LifecycleChanged(lifecycle) => {
                self.lifecycle = *lifecycle;
                self.spinner_frame = 0;
            }
            UiEvent::RequestFailed { message } => {
                self.error = Some(message.clone());
            }
            UiEvent::ErrorCleared => {
                self.error = None;
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.lifecycle.is_in_flight()
    }

    /// Advance animations
    pub fn tick(&mut self) {
        if self.is_in_flight() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    // ==================== Editing ====================

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        // Normalise pasted Windows line endings
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.input.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn delete_back(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.input.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move to the start of the current line
    pub fn cursor_start(&mut self) {
        self.cursor = self.input[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Move to the end of the current line
    pub fn cursor_end(&mut self) {
        self.cursor = self.input[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.input.len());
    }

    /// Cursor as (row, column) in characters, for placing the terminal cursor
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let before = &self.input[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].chars().count();
        (row, col)
    }

    /// Number of lines in the input buffer (at least one)
    pub fn input_line_count(&self) -> usize {
        self.input.split('\n').count().max(1)
    }

    // ==================== Scrolling ====================

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(SCROLL_STEP);
    }
}
