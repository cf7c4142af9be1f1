//! OpenAI-compatible upstream model client

use crate::error::UpstreamError;
use async_trait::async_trait;
use envchat_core::config::RelayConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Answers a single user message
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, UpstreamError>;
}

/// Chat-completions client that prefixes every request with a fixed system prompt
#[derive(Clone)]
pub struct OpenAIClient {
    http: Client,
    url: String,
    model: String,
    api_key: Option<String>,
    system_prompt: String,
}

impl OpenAIClient {
    pub fn from_config(config: &RelayConfig) -> Self {
        let base = config.endpoint.trim_end_matches('/');
        let path = config.api_path.trim_start_matches('/');
        Self {
            http: Client::new(),
            url: format!("{base}/{path}"),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn require_api_key(&self) -> Result<&str, UpstreamError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(UpstreamError::MissingApiKey)
    }

    fn payload<'a>(&'a self, message: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: message,
                },
            ],
            stream: false,
        }
    }
}

#[async_trait]
impl ModelClient for OpenAIClient {
    async fn complete(&self, message: &str) -> Result<String, UpstreamError> {
        let api_key = self.require_api_key()?;

        info!(
            url = self.url.as_str(),
            model = self.model.as_str(),
            "Sending request to upstream model"
        );

        let response: CompletionResponse = self
            .http
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| UpstreamError::network(&self.url, e))?
            .error_for_status()
            .map_err(|e| UpstreamError::network(&self.url, e))?
            .json()
            .await
            .map_err(|e| UpstreamError::invalid_response(e.to_string()))?;
        debug!("Received response from upstream model");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| UpstreamError::invalid_response("missing content"))
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}
