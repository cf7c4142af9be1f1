use super::app::{AppConfig, ExportConfig, RelayConfig, ServiceConfig, UiConfig};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(super) struct RawConfig {
    pub service: RawService,
    pub export: RawExport,
    pub ui: RawUi,
    pub server: RawServer,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(super) struct RawService {
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(super) struct RawExport {
    pub directory: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(super) struct RawUi {
    pub recent_limit: Option<usize>,
    pub quick_questions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(super) struct RawServer {
    pub addr: Option<String>,
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub system_prompt: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// An explicit path must exist. When no path is given and the default file
/// is absent, built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                info!(path = CONFIG_PATH, "No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str, origin: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading envchat configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let service = match parsed.service.base_url {
        Some(url) => ServiceConfig {
            base_url: validate_base_url(url)?,
        },
        None => ServiceConfig::default(),
    };

    let export_defaults = ExportConfig::default();
    let file_name = parsed
        .export
        .file_name
        .unwrap_or(export_defaults.file_name);
    if file_name.trim().is_empty() {
        return Err(ConfigError::EmptyExportFileName);
    }
    let export = ExportConfig {
        directory: parsed
            .export
            .directory
            .unwrap_or(export_defaults.directory),
        file_name,
    };

    let ui_defaults = UiConfig::default();
    let recent_limit = parsed.ui.recent_limit.unwrap_or(ui_defaults.recent_limit);
    if recent_limit == 0 {
        return Err(ConfigError::InvalidRecentLimit);
    }
    let ui = UiConfig {
        recent_limit,
        quick_questions: parsed
            .ui
            .quick_questions
            .unwrap_or(ui_defaults.quick_questions),
    };

    let server = build_relay(parsed.server)?;

    Ok(AppConfig {
        service,
        export,
        ui,
        server,
    })
}

fn build_relay(raw: RawServer) -> Result<RelayConfig, ConfigError> {
    let defaults = RelayConfig::default();
    let addr = match raw.addr {
        Some(addr) => addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidServerAddr { addr })?,
        None => defaults.addr,
    };
    let api_key = match raw.api_key {
        Some(value) => resolve_api_key(&value),
        None => defaults.api_key,
    };
    Ok(RelayConfig {
        addr,
        endpoint: raw.endpoint.unwrap_or(defaults.endpoint),
        api_path: raw.api_path.unwrap_or(defaults.api_path),
        model: raw.model.unwrap_or(defaults.model),
        api_key,
        system_prompt: raw.system_prompt.unwrap_or(defaults.system_prompt),
    })
}

pub(super) fn validate_base_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl { url })
    }
}

/// Expand `${VAR}` references in an API key. Unset variables and blank
/// results yield `None`.
pub(super) fn resolve_api_key(value: &str) -> Option<String> {
    ensure_env_loaded();
    shellexpand::env(value)
        .ok()
        .map(|expanded| expanded.trim().to_string())
        .filter(|key| !key.is_empty())
}
