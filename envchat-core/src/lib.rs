//! envchat core: configuration, the reply-service client and the exchange
//! controller that keeps a [`Session`](envchat_session::Session) consistent
//! with one in-flight request at a time.

pub mod config;
pub mod constants;
pub mod exchange;
pub mod export;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use exchange::{
    ExchangeController, ExchangeOutcome, PendingExchange, SendRejected, SharedSession,
    SubmitOrigin,
};
pub use export::{ExportError, TranscriptExporter};
pub use service::{HttpReplyService, ReplyError, ReplyService};

pub use envchat_session as session;
