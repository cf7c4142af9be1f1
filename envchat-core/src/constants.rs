//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/envchat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Reply service used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7860";

/// Path of the chat endpoint on the reply service
pub const CHAT_PATH: &str = "/chat";

/// File name for exported transcripts
pub const DEFAULT_EXPORT_FILE_NAME: &str = "nuclear-environment-chat.txt";

/// Bot message shown when an exchange fails for any reason
pub const APOLOGY: &str = "Sorry, I'm having trouble connecting right now. Please try again.";
