//! Key bindings for the chat input
//!
//! Plain Enter submits. Shift+Enter inserts a line break instead; Alt+Enter
//! and Ctrl+J do the same for terminals that cannot report Shift+Enter.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Send the draft
    Submit,
    /// Insert a line break into the draft
    InsertNewline,
    /// Insert a character into the draft
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character under the cursor (Delete)
    DeleteForward,
    CursorLeft,
    CursorRight,
    /// Move to start of the current line
    CursorStart,
    /// Move to end of the current line
    CursorEnd,
    /// Scroll the conversation up
    ScrollUp,
    /// Scroll the conversation down
    ScrollDown,
    /// Quit the application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to input actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> InputAction {
        // Release/repeat events are reported on some platforms; only presses count.
        if key.kind == KeyEventKind::Release {
            return InputAction::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL) => InputAction::Quit,

            (KeyCode::Enter, m) if m.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
                InputAction::InsertNewline
            }
            (KeyCode::Char('j'), KeyModifiers::CONTROL) => InputAction::InsertNewline,
            (KeyCode::Enter, _) => InputAction::Submit,

            (KeyCode::Backspace, _) => InputAction::DeleteBack,
            (KeyCode::Delete, _) => InputAction::DeleteForward,
            (KeyCode::Left, _) => InputAction::CursorLeft,
            (KeyCode::Right, _) => InputAction::CursorRight,
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                InputAction::CursorStart
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                InputAction::CursorEnd
            }
            (KeyCode::PageUp, _) | (KeyCode::Up, KeyModifiers::CONTROL) => InputAction::ScrollUp,
            (KeyCode::PageDown, _) | (KeyCode::Down, KeyModifiers::CONTROL) => {
                InputAction::ScrollDown
            }

            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                InputAction::InsertChar(c)
            }
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_submits() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(key), InputAction::Submit);
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(KeyHandler::handle(key), InputAction::InsertNewline);
    }

    #[test]
    fn test_newline_fallbacks() {
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(KeyHandler::handle(alt_enter), InputAction::InsertNewline);

        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(ctrl_j), InputAction::InsertNewline);
    }

    #[test]
    fn test_characters_are_inserted() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(key), InputAction::InsertChar('x'));

        let upper = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(KeyHandler::handle(upper), InputAction::InsertChar('X'));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(key), InputAction::Quit);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyHandler::handle(key), InputAction::None);
    }

    #[test]
    fn test_scroll_keys() {
        let up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(up), InputAction::ScrollUp);

        let down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(down), InputAction::ScrollDown);
    }
}
