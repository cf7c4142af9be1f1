use super::defaults::*;
use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_EXPORT_FILE_NAME};
use std::net::SocketAddr;
use std::path::Path;

/// Application configuration loaded from envchat.toml
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub server: RelayConfig,
}

/// Where the chat client sends messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Transcript export target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory, may contain `~` or `$VAR`; expanded at write time
    pub directory: String,
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_EXPORT_DIRECTORY.to_string(),
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub recent_limit: usize,
    pub quick_questions: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            quick_questions: DEFAULT_QUICK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Relay service settings (`envchat serve`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub addr: SocketAddr,
    /// OpenAI-compatible API base
    pub endpoint: String,
    pub api_path: String,
    pub model: String,
    /// Resolved key; `None` when the configured value or variable is empty
    pub api_key: Option<String>,
    pub system_prompt: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 7860)),
            endpoint: DEFAULT_UPSTREAM_ENDPOINT.to_string(),
            api_path: DEFAULT_UPSTREAM_API_PATH.to_string(),
            model: DEFAULT_UPSTREAM_MODEL.to_string(),
            api_key: super::loader::resolve_api_key(DEFAULT_UPSTREAM_API_KEY),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Replace the reply service base URL, e.g. from a CLI flag
    pub fn override_base_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        self.service.base_url = super::loader::validate_base_url(url.into())?;
        Ok(())
    }
}
