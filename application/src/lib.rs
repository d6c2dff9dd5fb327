//! Application layer for ask-ai
//!
//! This crate contains the answer request controller and the port
//! definitions it drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, GENERIC_FAILURE_MESSAGE, GatewayError},
    conversation_logger::{
        ConversationEvent, ConversationEventKind, ConversationLogger, NoConversationLogger,
    },
    ui_event::UiEvent,
};
pub use use_cases::answer_request::{AnswerRequestController, SubmitOutcome};
