//! Interactive terminal chat
//!
//! Renders the conversation owned by
//! [`AnswerRequestController`](askai_application::AnswerRequestController)
//! and feeds keystrokes back to it.

mod app;
pub mod keys;
pub mod state;
pub mod widgets;

pub use app::ChatApp;
