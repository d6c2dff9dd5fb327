//! Domain layer for ask-ai
//!
//! This crate contains the conversation model and request lifecycle types.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! - **Message**: a single turn, either from the user or from the assistant
//! - **ConversationStore**: the append-only transcript plus the input draft
//!
//! ## Request lifecycle
//!
//! - **RequestLifecycle**: Idle → InFlight → (Errored) → Idle
//! - **Completion**: what the completion service produced for one question

pub mod conversation;
pub mod core;
pub mod request;

// Re-export commonly used types
pub use conversation::{
    message::{Message, Origin},
    store::ConversationStore,
};
pub use core::{error::DomainError, question::Question};
pub use request::{
    completion::{Completion, FALLBACK_ANSWER},
    lifecycle::{InFlightRequest, RequestId, RequestLifecycle},
};
