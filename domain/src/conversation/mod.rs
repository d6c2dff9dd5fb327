//! Conversation subdomain: messages and the transcript store.

pub mod message;
pub mod store;
