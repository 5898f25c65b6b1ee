//! Todo CLI application.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use todo_core::TodoServiceBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let service = TodoServiceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize todo store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Todo started");

    let cli = Cli::new(service, renderer);
    match command {
        Some(command) => cli.handle_command(command).await,
        None => cli.list().await,
    }
}
