pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;

pub use app::{AppConfig, ExportConfig, RelayConfig, ServiceConfig, UiConfig};
pub use error::ConfigError;
