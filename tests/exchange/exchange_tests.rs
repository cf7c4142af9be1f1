//! Exchange controller tests with in-process reply services

use async_trait::async_trait;
use envchat_core::constants::APOLOGY;
use envchat_core::{
    ExchangeController, ExchangeOutcome, ReplyError, ReplyService, SendRejected, SubmitOrigin,
};
use envchat_session::{Sender, Session};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Answers once the test releases it
struct Gated {
    release: Arc<Notify>,
    calls: AtomicUsize,
}

impl Gated {
    fn new() -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        (
            Self {
                release: Arc::clone(&release),
                calls: AtomicUsize::new(0),
            },
            release,
        )
    }
}

#[async_trait]
impl ReplyService for Gated {
    async fn reply(&self, message: &str) -> Result<String, ReplyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(format!("answer to {message}"))
    }
}

struct Failing;

#[async_trait]
impl ReplyService for Failing {
    async fn reply(&self, _message: &str) -> Result<String, ReplyError> {
        Err(ReplyError::invalid_response("http://test/chat", "missing reply"))
    }
}

#[tokio::test]
async fn busy_is_set_before_the_request_resolves() {
    let (service, release) = Gated::new();
    let controller = ExchangeController::new(Session::new(), service);

    let pending = controller
        .begin("What is nuclear energy?", SubmitOrigin::Preset)
        .expect("accepted");
    {
        let session = controller.session();
        assert!(session.is_busy());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].sender, Sender::User);
    }

    let task = tokio::spawn(pending.complete());
    release.notify_one();
    let outcome = task.await.expect("task");

    assert!(matches!(outcome, ExchangeOutcome::Replied(_)));
    let session = controller.session();
    assert!(!session.is_busy());
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].text, "answer to What is nuclear energy?");
}

#[tokio::test]
async fn second_send_while_busy_is_rejected_silently() {
    let (service, release) = Gated::new();
    let service = Arc::new(service);
    let controller = ExchangeController::with_shared(
        Arc::new(std::sync::Mutex::new(Session::new())),
        Arc::clone(&service),
    );

    let pending = controller.begin("first", SubmitOrigin::Preset).expect("accepted");
    let second = controller.begin("second", SubmitOrigin::Preset);
    assert_eq!(second.err(), Some(SendRejected::Busy));
    assert_eq!(controller.session().history().len(), 1);

    let task = tokio::spawn(pending.complete());
    release.notify_one();
    task.await.expect("task");

    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.session().history().len(), 2);
}

#[tokio::test]
async fn whitespace_input_is_ignored() {
    let controller = ExchangeController::new(Session::new(), Failing);
    controller.session().set_input("   \n\t ");

    let result = controller.submit_input().await;

    assert_eq!(result.err(), Some(SendRejected::EmptyText));
    let session = controller.session();
    assert!(session.history().is_empty());
    assert!(!session.is_busy());
    assert_eq!(session.pending_input(), "   \n\t ");
}

#[tokio::test]
async fn accepted_input_is_cleared_but_presets_leave_it() {
    let controller = ExchangeController::new(Session::new(), Failing);

    controller.session().set_input("draft question");
    controller.submit_input().await.expect("accepted");
    assert_eq!(controller.session().pending_input(), "");

    controller.session().set_input("keep me");
    controller
        .send("What is clean energy?", SubmitOrigin::Preset)
        .await
        .expect("accepted");
    assert_eq!(controller.session().pending_input(), "keep me");
}

#[tokio::test]
async fn failure_appends_apology_and_releases_busy() {
    let controller = ExchangeController::new(Session::new(), Failing);

    let outcome = controller
        .send("Explain nuclear fusion", SubmitOrigin::Preset)
        .await
        .expect("accepted");

    assert!(outcome.is_failure());
    let session = controller.session();
    assert!(!session.is_busy());
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].sender, Sender::Bot);
    assert_eq!(session.history()[1].text, APOLOGY);
}

#[tokio::test]
async fn dropped_exchange_still_answers() {
    let (service, _release) = Gated::new();
    let controller = ExchangeController::new(Session::new(), service);

    let pending = controller.begin("abandoned", SubmitOrigin::History).expect("accepted");
    drop(pending);

    let session = controller.session();
    assert!(!session.is_busy());
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].text, APOLOGY);
}

#[tokio::test]
async fn clear_is_refused_during_an_exchange() {
    let (service, release) = Gated::new();
    let controller = ExchangeController::new(Session::new(), service);

    let pending = controller.begin("hello", SubmitOrigin::Preset).expect("accepted");
    assert!(!controller.clear_history());

    let task = tokio::spawn(pending.complete());
    release.notify_one();
    task.await.expect("task");

    assert!(controller.clear_history());
    assert!(controller.session().history().is_empty());
}

#[tokio::test]
async fn every_question_gets_exactly_one_answer() {
    let controller = ExchangeController::new(Session::new(), Failing);
    for question in ["a", "b", "c"] {
        controller
            .send(question, SubmitOrigin::Preset)
            .await
            .expect("accepted");
    }

    let session = controller.session();
    let senders: Vec<Sender> = session.history().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
    assert_eq!(session.stats().response_rate, 50);
}
