//! HTTP reply service client

use super::ReplyService;
use super::error::ReplyError;
use crate::config::ServiceConfig;
use crate::constants::CHAT_PATH;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Talks to `POST {base_url}/chat`
#[derive(Clone)]
pub struct HttpReplyService {
    endpoint: String,
    http: Client,
}

impl HttpReplyService {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: build_url(base_url, CHAT_PATH),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.base_url)
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build URL from base and path
fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[async_trait]
impl ReplyService for HttpReplyService {
    async fn reply(&self, message: &str) -> Result<String, ReplyError> {
        info!(
            endpoint = self.endpoint.as_str(),
            chars = message.chars().count(),
            "Sending message to reply service"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatPayload { message })
            .send()
            .await
            .map_err(|e| ReplyError::network(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplyError::status(&self.endpoint, status));
        }

        let body: ChatReplyBody = response
            .json()
            .await
            .map_err(|e| ReplyError::invalid_response(&self.endpoint, e.to_string()))?;
        debug!("Received response from reply service");

        body.reply
            .ok_or_else(|| ReplyError::invalid_response(&self.endpoint, "missing reply"))
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReplyBody {
    reply: Option<String>,
}
