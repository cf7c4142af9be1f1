use std::net::SocketAddr;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "envchat",
    version,
    about = "Chat client for the Nuclear & Environment AI Assistant"
)]
pub struct Cli {
    /// Configuration file (default: config/envchat.toml, optional)
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Reply service base URL, overrides the configuration file
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Write logs to this file; the chat screen logs nowhere otherwise
    #[arg(long, global = true)]
    pub log_file: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive full-screen chat (default)
    Chat,
    /// Send one message and print the reply
    Send {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Run the relay service that answers POST /chat
    Serve {
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}
