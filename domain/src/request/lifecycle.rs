//! Request lifecycle state

use crate::core::question::Question;
use serde::Serialize;

/// Phase of the answer request lifecycle
///
/// ```text
/// Idle --submit--> InFlight --success/degraded--> Idle
///                  InFlight --failure--> Errored --> Idle
/// ```
///
/// `Errored` only exists while a failure is being recorded; it never blocks
/// the next submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    InFlight,
    Errored,
}

impl RequestLifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestLifecycle::Idle => "idle",
            RequestLifecycle::InFlight => "in_flight",
            RequestLifecycle::Errored => "errored",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestLifecycle::InFlight)
    }

    /// Whether a new submission may start
    pub fn accepts_submit(&self) -> bool {
        !self.is_in_flight()
    }
}

impl std::fmt::Display for RequestLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monotonic identifier for submissions within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Ticket for an accepted submission
///
/// Produced when a submission starts and consumed when it settles, so each
/// submission settles at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct InFlightRequest {
    id: RequestId,
    question: Question,
}

impl InFlightRequest {
    pub fn new(id: RequestId, question: Question) -> Self {
        Self { id, question }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn question(&self) -> &Question {
        &self.question
    }
}
