use clap::Parser;
use envchat_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    envchat_cli::run(Cli::parse()).await
}
