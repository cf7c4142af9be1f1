//! Reply service abstraction

mod error;
mod http;

pub use error::ReplyError;
pub use http::HttpReplyService;

use async_trait::async_trait;
use std::sync::Arc;

/// Something that answers one user message with one reply
#[async_trait]
pub trait ReplyService: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, ReplyError>;
}

#[async_trait]
impl<T: ReplyService + ?Sized> ReplyService for Arc<T> {
    async fn reply(&self, message: &str) -> Result<String, ReplyError> {
        (**self).reply(message).await
    }
}
