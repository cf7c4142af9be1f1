use reqwest::StatusCode;
use thiserror::Error;

/// Reply service failures. The exchange controller treats every variant the
/// same way; the distinction only matters for diagnostics.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("network error calling reply service at '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reply service at '{endpoint}' returned status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("reply service at '{endpoint}' returned invalid response: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

impl ReplyError {
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}
