//! Gemini `generateContent` adapter
//!
//! Implements the [`CompletionGateway`](askai_application::CompletionGateway)
//! port over HTTP with reqwest.

mod gateway;
pub mod protocol;

pub use gateway::{GeminiGateway, GeminiSettings};
