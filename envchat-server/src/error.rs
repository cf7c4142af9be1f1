use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Failures talking to the upstream model
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream model requires an API key")]
    MissingApiKey,
    #[error("network error calling upstream model at '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream model returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl UpstreamError {
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Message safe to return to HTTP callers
    pub fn user_message(&self) -> String {
        match self {
            UpstreamError::MissingApiKey => "The assistant is not configured.".to_string(),
            UpstreamError::Network { source, .. } => {
                if source.is_connect() {
                    "Could not reach the language model.".to_string()
                } else if source.is_timeout() {
                    "The language model took too long to answer.".to_string()
                } else if let Some(status) = source.status() {
                    format!("The language model request failed: {}", status.as_u16())
                } else {
                    "Network error while contacting the language model.".to_string()
                }
            }
            UpstreamError::InvalidResponse { .. } => {
                "The language model returned an unexpected response.".to_string()
            }
        }
    }
}
