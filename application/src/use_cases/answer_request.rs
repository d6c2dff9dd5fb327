//! Answer Request Controller
//!
//! Owns the conversation store and the request lifecycle. Turns the current
//! draft into a user message, asks the completion gateway exactly once per
//! accepted submission, and folds the outcome back into the transcript.
//! Emits UiEvent messages to a channel for the presentation layer to render.
//!
//! A submission is split into two steps so the caller can keep handling
//! input while the request runs:
//!
//! 1. [`AnswerRequestController::begin_submit`] validates, appends the user
//!    message and hands out an [`InFlightRequest`] ticket.
//! 2. [`AnswerRequestController::settle`] consumes the ticket together with
//!    the gateway outcome. It is the only place the lifecycle leaves
//!    `InFlight`, and it always clears the draft.
//!
//! [`AnswerRequestController::submit`] runs both steps back to back.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::ui_event::UiEvent;
use askai_domain::{
    Completion, ConversationStore, DomainError, InFlightRequest, Message, Question, RequestId,
    RequestLifecycle,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How a settled submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service answered and the answer was recorded
    Answered,
    /// The service succeeded without an answer; the fallback text was recorded
    Degraded,
    /// The request failed; nothing was recorded for the assistant
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmitOutcome::Failed { .. })
    }
}

/// Controller for the question/answer request lifecycle
pub struct AnswerRequestController {
    gateway: Arc<dyn CompletionGateway>,
    store: ConversationStore,
    lifecycle: RequestLifecycle,
    /// Latest failure, kept for display until the next accepted submission
    last_error: Option<String>,
    /// Ticket id of the request currently in flight
    in_flight: Option<RequestId>,
    next_id: RequestId,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerRequestController {
    /// Create a controller with an empty conversation
    pub fn new(gateway: Arc<dyn CompletionGateway>, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            gateway,
            store: ConversationStore::new(),
            lifecycle: RequestLifecycle::Idle,
            last_error: None,
            in_flight: None,
            next_id: RequestId::new(1),
            tx,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set a conversation logger for structured event logging.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    // ==================== Read access for rendering ====================

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn draft(&self) -> &str {
        self.store.draft()
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.lifecycle
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lifecycle.is_in_flight()
    }

    /// Shared handle to the gateway, for running a request off the UI loop
    pub fn gateway(&self) -> Arc<dyn CompletionGateway> {
        self.gateway.clone()
    }

    // ==================== Input ====================

    /// Replace the draft with what the user has typed so far
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.store.set_draft(text);
        self.emit(UiEvent::DraftChanged {
            draft: self.store.draft().to_string(),
        });
    }

    /// Start a submission from the current draft.
    ///
    /// Returns an error, and changes nothing, when a request is already in
    /// flight or the draft is blank. Both cases are silent no-ops for the
    /// user rather than failures.
    pub fn begin_submit(&mut self) -> Result<InFlightRequest, DomainError> {
        if !self.lifecycle.accepts_submit() {
            debug!("Ignoring submit: a request is already in flight");
            return Err(DomainError::RequestInFlight);
        }

        let question = Question::try_from(self.store.draft()).inspect_err(|_| {
            debug!("Ignoring submit: draft is blank");
        })?;

        let id = self.next_id;
        self.next_id = id.next();
        self.in_flight = Some(id);
        self.set_lifecycle(RequestLifecycle::InFlight);

        if self.last_error.take().is_some() {
            self.emit(UiEvent::ErrorCleared);
        }

        if let Some(message) = self.store.append_user(question.content()) {
            let message = message.clone();
            self.conversation_logger
                .log(ConversationEvent::user_message(id, message.text()));
            self.emit(UiEvent::MessageAppended(message));
        }

        info!(request = %id, model = self.gateway.model(), "Submitting question");
        Ok(InFlightRequest::new(id, question))
    }

    /// Record the outcome of an in-flight request.
    ///
    /// Returns `None` if `request` is not the request currently in flight;
    /// such a settle is ignored. Otherwise the lifecycle ends at `Idle` and
    /// the draft is empty, whatever the outcome.
    pub fn settle(
        &mut self,
        request: InFlightRequest,
        outcome: Result<Completion, GatewayError>,
    ) -> Option<SubmitOutcome> {
        if self.in_flight != Some(request.id()) {
            warn!(request = %request.id(), "Ignoring settle for a request that is not in flight");
            return None;
        }

        let settled = match outcome {
            Ok(completion) => {
                let degraded = completion.is_degraded();
                if degraded {
                    warn!(request = %request.id(), "Response contained no answer, using fallback text");
                }
                self.record_answer(request.id(), completion.into_transcript_text());
                if degraded {
                    SubmitOutcome::Degraded
                } else {
                    SubmitOutcome::Answered
                }
            }
            Err(error) => {
                let message = error.user_message();
                warn!(request = %request.id(), "Request failed: {}", message);
                self.set_lifecycle(RequestLifecycle::Errored);
                self.last_error = Some(message.clone());
                self.conversation_logger
                    .log(ConversationEvent::request_failed(request.id(), message.as_str()));
                self.emit(UiEvent::RequestFailed {
                    message: message.clone(),
                });
                SubmitOutcome::Failed { message }
            }
        };

        self.in_flight = None;
        self.store.clear_draft();
        self.emit(UiEvent::DraftChanged {
            draft: String::new(),
        });
        self.set_lifecycle(RequestLifecycle::Idle);

        info!(request = %request.id(), outcome = ?settled, "Request settled");
        Some(settled)
    }

    /// Submit the current draft and wait for the answer.
    ///
    /// Returns `None` if the submission was a no-op.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let request = self.begin_submit().ok()?;
        let outcome = self.gateway.generate(request.question()).await;
        self.settle(request, outcome)
    }

    /// Replace the draft with `text` and submit it
    pub async fn submit_text(&mut self, text: impl Into<String>) -> Option<SubmitOutcome> {
        self.set_draft(text);
        self.submit().await
    }

    // ==================== Internals ====================

    fn record_answer(&mut self, id: RequestId, text: String) {
        let message = self.store.append_assistant(text).clone();
        self.conversation_logger.log(ConversationEvent::assistant_message(
            id,
            self.gateway.model(),
            message.text(),
        ));
        self.emit(UiEvent::MessageAppended(message));
    }

    fn set_lifecycle(&mut self, lifecycle: RequestLifecycle) {
        if self.lifecycle != lifecycle {
            debug!("Lifecycle {} -> {}", self.lifecycle, lifecycle);
            self.lifecycle = lifecycle;
            self.emit(UiEvent::LifecycleChanged(lifecycle));
        }
    }

    fn emit(&self, event: UiEvent) {
        // A closed receiver just means nobody is rendering any more.
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::ConversationEventKind;
    use askai_domain::{FALLBACK_ANSWER, Origin};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<Completion, GatewayError>>>,
        questions: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<Completion, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                questions: Mutex::new(Vec::new()),
            }
        }

        fn questions(&self) -> Vec<String> {
            self.questions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        fn model(&self) -> &str {
            "mock-model"
        }

        async fn generate(&self, question: &Question) -> Result<Completion, GatewayError> {
            self.questions
                .lock()
                .unwrap()
                .push(question.content().to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("No more responses".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<ConversationEvent>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn controller_with(
        responses: Vec<Result<Completion, GatewayError>>,
    ) -> (
        AnswerRequestController,
        Arc<MockGateway>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let gateway = Arc::new(MockGateway::new(responses));
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = AnswerRequestController::new(gateway.clone(), tx);
        (controller, gateway, rx)
    }

    fn server_error() -> GatewayError {
        GatewayError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn transcript(controller: &AnswerRequestController) -> Vec<(Origin, String)> {
        controller
            .messages()
            .iter()
            .map(|m| (m.origin(), m.text().to_string()))
            .collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_answered_submission() {
        let (mut controller, gateway, _rx) =
            controller_with(vec![Ok(Completion::answered("4"))]);

        let outcome = controller.submit_text("What is 2+2?").await;

        assert_eq!(outcome, Some(SubmitOutcome::Answered));
        assert_eq!(
            transcript(&controller),
            vec![
                (Origin::User, "What is 2+2?".to_string()),
                (Origin::Assistant, "4".to_string()),
            ]
        );
        assert_eq!(controller.last_error(), None);
        assert_eq!(controller.lifecycle(), RequestLifecycle::Idle);
        assert_eq!(controller.draft(), "");
        assert_eq!(gateway.questions(), vec!["What is 2+2?".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_user_message() {
        let (mut controller, _gateway, _rx) = controller_with(vec![Err(server_error())]);

        let outcome = controller.submit_text("Hi").await;

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed {
                message: "API Error: 500 - Internal Server Error".to_string()
            })
        );
        assert_eq!(
            transcript(&controller),
            vec![(Origin::User, "Hi".to_string())]
        );
        assert_eq!(
            controller.last_error(),
            Some("API Error: 500 - Internal Server Error")
        );
        assert_eq!(controller.lifecycle(), RequestLifecycle::Idle);
        assert_eq!(controller.draft(), "");
    }

    #[tokio::test]
    async fn test_degraded_submission_records_fallback() {
        let (mut controller, _gateway, _rx) = controller_with(vec![Ok(Completion::missing())]);

        let outcome = controller.submit_text("Anything?").await;

        assert_eq!(outcome, Some(SubmitOutcome::Degraded));
        assert_eq!(controller.messages().len(), 2);
        assert_eq!(controller.messages()[1].origin(), Origin::Assistant);
        assert_eq!(controller.messages()[1].text(), FALLBACK_ANSWER);
        assert_eq!(controller.last_error(), None);
        assert_eq!(controller.lifecycle(), RequestLifecycle::Idle);
    }

    #[tokio::test]
    async fn test_transport_failure_message() {
        let (mut controller, _gateway, _rx) = controller_with(vec![Err(
            GatewayError::Transport("error sending request".to_string()),
        )]);

        controller.submit_text("Hello").await;

        assert_eq!(controller.last_error(), Some("error sending request"));
        assert!(
            controller
                .messages()
                .iter()
                .all(|m| m.origin() == Origin::User)
        );
    }

    #[tokio::test]
    async fn test_blank_draft_is_noop() {
        let (mut controller, gateway, mut rx) = controller_with(vec![]);

        for blank in ["", "   ", "\n\t"] {
            let outcome = controller.submit_text(blank).await;
            assert_eq!(outcome, None);
        }

        controller.set_draft(" \n ");
        let rejected = controller.begin_submit().unwrap_err();
        assert!(matches!(rejected, DomainError::InvalidQuestion(_)));
        assert!(rejected.is_validation());

        assert!(controller.messages().is_empty());
        assert_eq!(controller.lifecycle(), RequestLifecycle::Idle);
        assert!(gateway.questions().is_empty());
        // Only draft updates were announced
        assert!(
            drain(&mut rx)
                .iter()
                .all(|e| matches!(e, UiEvent::DraftChanged { .. }))
        );
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_noop() {
        let (mut controller, gateway, _rx) = controller_with(vec![Ok(Completion::answered("ok"))]);

        controller.set_draft("first");
        let request = controller.begin_submit().unwrap();
        assert_eq!(controller.lifecycle(), RequestLifecycle::InFlight);
        let len_before = controller.messages().len();

        controller.set_draft("second");
        assert_eq!(
            controller.begin_submit(),
            Err(DomainError::RequestInFlight)
        );
        assert_eq!(controller.submit().await, None);
        assert_eq!(controller.messages().len(), len_before);
        assert_eq!(controller.lifecycle(), RequestLifecycle::InFlight);
        assert!(gateway.questions().is_empty());

        let outcome = controller.settle(request, Ok(Completion::answered("ok")));
        assert_eq!(outcome, Some(SubmitOutcome::Answered));
        assert_eq!(controller.lifecycle(), RequestLifecycle::Idle);
        // Typing during the request is discarded when it settles
        assert_eq!(controller.draft(), "");
    }

    #[tokio::test]
    async fn test_stale_settle_is_ignored() {
        let (mut controller, _gateway, _rx) = controller_with(vec![]);

        controller.set_draft("question");
        let request = controller.begin_submit().unwrap();

        let stale = InFlightRequest::new(
            RequestId::new(request.id().value() + 10),
            Question::try_new("other").unwrap(),
        );
        assert_eq!(
            controller.settle(stale, Ok(Completion::answered("late"))),
            None
        );
        assert_eq!(controller.messages().len(), 1);
        assert!(controller.is_in_flight());

        controller.settle(request, Ok(Completion::answered("on time")));
        assert_eq!(controller.messages().len(), 2);
        assert_eq!(controller.messages()[1].text(), "on time");
    }

    #[tokio::test]
    async fn test_next_submit_clears_previous_error() {
        let (mut controller, _gateway, mut rx) = controller_with(vec![
            Err(server_error()),
            Ok(Completion::answered("recovered")),
        ]);

        controller.submit_text("first").await;
        assert!(controller.last_error().is_some());
        drain(&mut rx);

        controller.set_draft("second");
        let request = controller.begin_submit().unwrap();
        assert_eq!(controller.last_error(), None);
        assert!(drain(&mut rx).contains(&UiEvent::ErrorCleared));

        controller.settle(request, Ok(Completion::answered("recovered")));
        assert_eq!(controller.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_only_latest_question_is_sent() {
        let (mut controller, gateway, _rx) = controller_with(vec![
            Ok(Completion::answered("a1")),
            Ok(Completion::answered("a2")),
        ]);

        controller.submit_text("q1").await;
        controller.submit_text("q2").await;

        assert_eq!(
            gateway.questions(),
            vec!["q1".to_string(), "q2".to_string()]
        );
        assert_eq!(controller.messages().len(), 4);
    }

    #[tokio::test]
    async fn test_failure_event_sequence() {
        let (mut controller, _gateway, mut rx) = controller_with(vec![Err(server_error())]);

        controller.set_draft("Hi");
        drain(&mut rx);
        controller.submit().await;

        let lifecycles: Vec<_> = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::LifecycleChanged(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(
            lifecycles,
            vec![
                RequestLifecycle::InFlight,
                RequestLifecycle::Errored,
                RequestLifecycle::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_conversation_logger_receives_events() {
        let logger = Arc::new(RecordingLogger::default());
        let (controller, _gateway, _rx) = controller_with(vec![
            Ok(Completion::answered("4")),
            Err(server_error()),
        ]);
        let mut controller = controller.with_conversation_logger(logger.clone());

        controller.submit_text("What is 2+2?").await;
        controller.submit_text("Hi").await;

        let events = logger.events.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConversationEventKind::UserMessage,
                ConversationEventKind::AssistantMessage,
                ConversationEventKind::UserMessage,
                ConversationEventKind::RequestFailed,
            ]
        );

        // Each record carries the id of the submission it belongs to
        assert_eq!(events[0].request_id, events[1].request_id);
        assert_eq!(events[2].request_id, events[3].request_id);
        assert_ne!(events[1].request_id, events[2].request_id);
        assert_eq!(events[1].model.as_deref(), Some("mock-model"));
        assert_eq!(
            events[3].error.as_deref(),
            Some("API Error: 500 - Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_closed_receiver_does_not_break_controller() {
        let (mut controller, _gateway, rx) = controller_with(vec![Ok(Completion::answered("4"))]);
        drop(rx);

        let outcome = controller.submit_text("What is 2+2?").await;
        assert_eq!(outcome, Some(SubmitOutcome::Answered));
    }
}
