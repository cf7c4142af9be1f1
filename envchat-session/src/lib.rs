//! In-memory chat session for envchat.
//!
//! The session is never persisted; it lives as long as the process that
//! created it.

pub mod message;
pub mod session;
pub mod stats;
pub mod transcript;

pub use message::{Message, Sender};
pub use session::{Session, SessionEvent};
pub use stats::SessionStats;

/// Number of recent questions shown by default
pub const DEFAULT_RECENT_LIMIT: usize = 5;
