//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! ChatApp (select! loop)
//!   ├─ crossterm EventStream      keys → ChatState edits → controller.set_draft()
//!   │                             Enter → controller.begin_submit() → tokio::spawn(generate)
//!   ├─ pending request            JoinHandle → controller.settle()
//!   ├─ ui_rx (UiEvent)            ChatState::apply()
//!   └─ tick_interval              spinner animation
//! ```
//!
//! The controller lives on the UI task. Only the gateway call runs in a
//! spawned task, so typing and scrolling stay live while a request is out.

use super::keys::{InputAction, KeyHandler};
use super::state::ChatState;
use super::widgets::{
    MainLayout, conversation::ConversationWidget, error_banner::ErrorBannerWidget,
    header::HeaderWidget, input::InputWidget, status_bar::StatusBarWidget,
};
use askai_application::{AnswerRequestController, GatewayError, UiEvent};
use askai_domain::{Completion, InFlightRequest};
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

type GatewayResult = Result<Completion, GatewayError>;

/// A submitted question whose gateway call is still running
struct PendingRequest {
    request: InFlightRequest,
    handle: JoinHandle<GatewayResult>,
}

/// Interactive chat application
pub struct ChatApp {
    controller: AnswerRequestController,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    state: ChatState,
    pending: Option<PendingRequest>,
}

impl ChatApp {
    /// Create the app around a controller and the receiving end of its
    /// event channel
    pub fn new(controller: AnswerRequestController, ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        let mut state = ChatState::new(controller.gateway().model());
        state.messages = controller.messages().to_vec();
        state.insert_str(controller.draft());
        state.lifecycle = controller.lifecycle();
        state.error = controller.last_error().map(str::to_string);

        Self {
            controller,
            ui_rx,
            state,
            pending: None,
        }
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        // Needed to tell Shift+Enter apart from Enter
        let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        debug!("Keyboard enhancement: {}", enhanced_keys);

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal(enhanced_keys);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(120));

        loop {
            // Render
            terminal.draw(|frame| render(frame, &self.state))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, paste, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Gateway call finished
                joined = wait_pending(&mut self.pending), if self.pending.is_some() => {
                    if let Some(pending) = self.pending.take() {
                        self.finish_request(pending.request, joined);
                    }
                }

                // UiEvents from controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.state.apply(&ui_event);
                }

                // Spinner animation
                _ = tick.tick() => {
                    self.state.tick();
                }
            }
        }

        // Don't leave a request running in the background
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }

        // Restore terminal
        restore_terminal(enhanced_keys);
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_action(KeyHandler::handle(key)),
            Event::Paste(text) => {
                self.state.insert_str(&text);
                self.sync_draft();
            }
            // Resize is picked up by the next draw
            _ => {}
        }
    }

    fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Submit => self.submit(),
            InputAction::InsertNewline => {
                self.state.insert_char('\n');
                self.sync_draft();
            }
            InputAction::InsertChar(c) => {
                self.state.insert_char(c);
                self.sync_draft();
            }
            InputAction::DeleteBack => {
                self.state.delete_back();
                self.sync_draft();
            }
            InputAction::DeleteForward => {
                self.state.delete_forward();
                self.sync_draft();
            }
            InputAction::CursorLeft => self.state.cursor_left(),
            InputAction::CursorRight => self.state.cursor_right(),
            InputAction::CursorStart => self.state.cursor_start(),
            InputAction::CursorEnd => self.state.cursor_end(),
            InputAction::ScrollUp => self.state.scroll_up(),
            InputAction::ScrollDown => self.state.scroll_down(),
            InputAction::Quit => self.state.should_quit = true,
            InputAction::None => {}
        }
    }

    fn submit(&mut self) {
        let request = match self.controller.begin_submit() {
            Ok(request) => request,
            Err(e) if e.is_validation() => {
                debug!("Submit ignored: {}", e);
                return;
            }
            Err(e) => {
                warn!("Submit rejected: {}", e);
                return;
            }
        };
        self.drain_ui_events();

        let gateway = self.controller.gateway();
        let question = request.question().clone();
        let handle = tokio::spawn(async move { gateway.generate(&question).await });

        self.pending = Some(PendingRequest { request, handle });
    }

    fn finish_request(&mut self, request: InFlightRequest, joined: Result<GatewayResult, JoinError>) {
        let outcome = joined.unwrap_or_else(|e| {
            warn!("Request task ended abnormally: {}", e);
            Err(GatewayError::Transport(format!("Request task failed: {}", e)))
        });
        self.controller.settle(request, outcome);
        self.drain_ui_events();
    }

    /// Push the edited input to the controller as the new draft
    fn sync_draft(&mut self) {
        self.controller.set_draft(self.state.input.clone());
        self.drain_ui_events();
    }

    /// Apply every queued controller event right away, so the view never
    /// replays a stale draft over newer keystrokes
    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(&event);
        }
    }
}

async fn wait_pending(pending: &mut Option<PendingRequest>) -> Result<GatewayResult, JoinError> {
    match pending {
        Some(pending) => (&mut pending.handle).await,
        None => std::future::pending().await,
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &ChatState) {
    let layout = MainLayout::compute(
        frame.area(),
        state.input_line_count() as u16,
        state.error.is_some(),
    );

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(ConversationWidget::new(state), layout.conversation);
    if let Some(area) = layout.error {
        frame.render_widget(ErrorBannerWidget::new(state), area);
    }

    let input = InputWidget::new(state);
    frame.set_cursor_position(input.cursor_position(layout.input));
    frame.render_widget(input, layout.input);

    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}

fn restore_terminal(enhanced_keys: bool) {
    let mut stdout = io::stdout();
    if enhanced_keys {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen);
}
