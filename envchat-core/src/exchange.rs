//! Exchange controller
//!
//! Turns one submitted string into one request to the reply service and
//! appends the resulting messages to the session. At most one exchange is in
//! flight at a time; the session's busy flag is the gate.

use crate::constants::APOLOGY;
use crate::service::ReplyService;
use envchat_session::{Message, Session};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Session shared between the UI loop and in-flight exchanges.
/// The lock is never held across an await.
pub type SharedSession = Arc<Mutex<Session>>;

/// Where a submitted string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOrigin {
    /// The live input buffer; cleared when the send is accepted
    Input,
    /// A preset quick question
    Preset,
    /// A previously asked question picked from the recent list
    History,
}

/// Why a send was dropped. Rejections leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("message is empty")]
    EmptyText,
    #[error("an exchange is already in flight")]
    Busy,
}

/// How an exchange ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Replied(Message),
    Failed(Message),
}

impl ExchangeOutcome {
    /// The bot message that was appended
    pub fn message(&self) -> &Message {
        match self {
            ExchangeOutcome::Replied(message) | ExchangeOutcome::Failed(message) => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExchangeOutcome::Failed(_))
    }
}

fn lock(session: &SharedSession) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ExchangeController<S> {
    session: SharedSession,
    service: Arc<S>,
}

impl<S> Clone for ExchangeController<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: ReplyService + 'static> ExchangeController<S> {
    pub fn new(session: Session, service: S) -> Self {
        Self::with_shared(Arc::new(Mutex::new(session)), Arc::new(service))
    }

    pub fn with_shared(session: SharedSession, service: Arc<S>) -> Self {
        Self { session, service }
    }

    /// Lock the session for reading or editing the input buffer
    pub fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    /// Accept or reject a submission.
    ///
    /// On acceptance the user message is appended and the session is marked
    /// busy before this returns; the returned [`PendingExchange`] performs the
    /// request. Rejections are silent and change nothing.
    pub fn begin(&self, text: &str, origin: SubmitOrigin) -> Result<PendingExchange<S>, SendRejected> {
        let mut session = self.session();
        self.admit(&mut session, text.to_string(), origin)
    }

    /// [`begin`](Self::begin) with the current input buffer
    pub fn begin_input(&self) -> Result<PendingExchange<S>, SendRejected> {
        let mut session = self.session();
        let text = session.pending_input().to_string();
        self.admit(&mut session, text, SubmitOrigin::Input)
    }

    /// Run one full exchange
    pub async fn send(&self, text: &str, origin: SubmitOrigin) -> Result<ExchangeOutcome, SendRejected> {
        let pending = self.begin(text, origin)?;
        Ok(pending.complete().await)
    }

    /// Run one full exchange with the current input buffer
    pub async fn submit_input(&self) -> Result<ExchangeOutcome, SendRejected> {
        let pending = self.begin_input()?;
        Ok(pending.complete().await)
    }

    /// Transcript of the current history
    pub fn export_text(&self) -> String {
        self.session().export_text()
    }

    /// Empty the history. Returns `false` while an exchange is in flight.
    pub fn clear_history(&self) -> bool {
        let cleared = self.session().clear();
        if !cleared {
            debug!("Clear refused while an exchange is in flight");
        }
        cleared
    }

    fn admit(
        &self,
        session: &mut Session,
        text: String,
        origin: SubmitOrigin,
    ) -> Result<PendingExchange<S>, SendRejected> {
        if text.trim().is_empty() {
            return Err(SendRejected::EmptyText);
        }
        if session.is_busy() {
            return Err(SendRejected::Busy);
        }

        session.append_message(Message::user(text.clone()));
        if origin == SubmitOrigin::Input {
            session.clear_input();
        }
        session.set_busy(true);
        debug!(?origin, chars = text.chars().count(), "Exchange started");

        Ok(PendingExchange {
            session: Arc::clone(&self.session),
            service: Arc::clone(&self.service),
            text,
            settled: false,
        })
    }
}

/// An accepted exchange whose request has not finished yet.
///
/// Completing it appends the bot message and clears the busy flag. Dropping
/// it unfinished appends the apology and clears the flag, so every user
/// message still gets exactly one answer.
#[must_use = "an accepted exchange keeps the session busy until completed or dropped"]
pub struct PendingExchange<S> {
    session: SharedSession,
    service: Arc<S>,
    text: String,
    settled: bool,
}

impl<S: ReplyService> PendingExchange<S> {
    /// Issue the request and settle the exchange
    pub async fn complete(mut self) -> ExchangeOutcome {
        let outcome = match self.service.reply(&self.text).await {
            Ok(reply) => {
                debug!(chars = reply.chars().count(), "Exchange replied");
                ExchangeOutcome::Replied(Message::bot(reply))
            }
            Err(err) => {
                error!(error = %err, "Exchange failed");
                ExchangeOutcome::Failed(Message::bot(APOLOGY))
            }
        };
        self.settle(outcome.message().clone());
        outcome
    }
}

impl<S> PendingExchange<S> {
    fn settle(&mut self, message: Message) {
        let mut session = lock(&self.session);
        session.append_message(message);
        session.set_busy(false);
        self.settled = true;
    }
}

impl<S> Drop for PendingExchange<S> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Exchange dropped before the reply arrived");
            self.settle(Message::bot(APOLOGY));
        }
    }
}
