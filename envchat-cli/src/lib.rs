pub mod cli;
pub mod tui;

pub use cli::{Cli, Command};

use envchat_core::session::Session;
use envchat_core::{
    AppConfig, ExchangeController, HttpReplyService, SubmitOrigin, TranscriptExporter,
};
use envchat_server::OpenAIClient;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tui::chat::ChatOptions;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let command = cli.command();

    // The chat screen owns the terminal, so it only logs to a file.
    let quiet_mode = matches!(command, Command::Chat) && cli.log_file.is_none();
    init_tracing(quiet_mode, cli.log_file.as_deref())?;
    info!("Starting envchat");
    debug!(
        command = ?command,
        config = ?cli.config,
        base_url = ?cli.base_url,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    if let Some(url) = &cli.base_url {
        info!(url = %url, "Overriding reply service URL based on CLI flag");
        config.override_base_url(url.clone())?;
    }

    match command {
        Command::Chat => run_chat(config).await?,
        Command::Send { text } => run_send(config, text.join(" ")).await?,
        Command::Serve { addr } => {
            let addr = addr.unwrap_or(config.server.addr);
            info!(%addr, model = config.server.model.as_str(), "Starting relay server");
            let client = Arc::new(OpenAIClient::from_config(&config.server));
            envchat_server::serve(client, addr).await?;
        }
    }
    info!("envchat finished");
    Ok(())
}

async fn run_chat(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let service = HttpReplyService::from_config(&config.service);
    info!(endpoint = service.endpoint(), "Launching chat screen");
    let controller = ExchangeController::new(Session::new(), service);
    let options = ChatOptions {
        endpoint: config.service.base_url.clone(),
        quick_questions: config.ui.quick_questions.clone(),
        recent_limit: config.ui.recent_limit,
        exporter: TranscriptExporter::from_config(&config.export),
    };
    tui::chat::run_chat(controller, options).await
}

async fn run_send(config: AppConfig, text: String) -> Result<(), Box<dyn Error>> {
    let service = HttpReplyService::from_config(&config.service);
    let controller = ExchangeController::new(Session::new(), service);
    let outcome = controller.send(&text, SubmitOrigin::Preset).await?;
    println!("{}", outcome.message().text);
    if outcome.is_failure() {
        return Err("reply service did not answer".into());
    }
    Ok(())
}

fn init_tracing(quiet: bool, log_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    static INIT: std::sync::Once = std::sync::Once::new();

    let writer = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);
        match writer {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
    Ok(())
}
