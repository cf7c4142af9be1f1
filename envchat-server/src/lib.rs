//! Relay service for envchat.
//!
//! Answers `POST /chat` (`{"message"}` → `{"reply"}`) by asking an
//! OpenAI-compatible model with a fixed system prompt.

mod dto;
mod error;
mod router;
mod routes;
mod state;
pub mod upstream;

pub use dto::{ChatRequest, ChatResponse, ErrorResponse};
pub use error::{ServerError, UpstreamError};
pub use router::{router, serve, serve_on};
pub use upstream::{ModelClient, OpenAIClient};
