//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated, non-blank user question
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
